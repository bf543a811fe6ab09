//! Built-in document-type catalog.
//!
//! Bulk declarative content: one descriptor per supported Brazilian document
//! type, with the domain instruction authored once per type and the output
//! schema assembled from the shared fragments.

use gemini_client::Schema;

use super::{fragments, Descriptor, DocumentTypeId};

pub const CNIS: &str = "CADASTRO_NACIONAL_INFORMACAO_SOCIAL";
pub const CAEPF: &str = "CADASTRO_ATIVIDADE_ECONOMICA_PESSOA_FISICA";
pub const COMPROVANTE_RESIDENCIA: &str = "COMPROVANTE_RESIDENCIA";
pub const RGP: &str = "REGISTRO_GERAL_PESCA";

const JSON_MIME: &str = "application/json";

/// All built-in (identifier, descriptor) pairs.
pub fn entries() -> Vec<(DocumentTypeId, Descriptor)> {
    vec![
        (DocumentTypeId::new(CNIS), cnis()),
        (DocumentTypeId::new(CAEPF), caepf()),
        (
            DocumentTypeId::new(COMPROVANTE_RESIDENCIA),
            comprovante_residencia(),
        ),
        (DocumentTypeId::new(RGP), rgp()),
    ]
}

fn cnis() -> Descriptor {
    Descriptor {
        name: "Cadastro Nacional de Informações Sociais".to_string(),
        sigla: Some("CNIS".to_string()),
        instruction: "\
O CNIS (Cadastro Nacional de Informações Sociais) é um documento emitido pelo INSS / Ministério da Previdência Social que reúne o histórico laboral e previdenciário de uma pessoa, incluindo vínculos empregatícios, contribuições como autônomo, períodos de atividade e dados cadastrais.

Ele é utilizado em solicitações de aposentadoria, benefícios previdenciários, seguro-desemprego e validação de vínculos e contribuições.

O documento pode estar em PDF ou imagem (JPEG, PNG), e contém tabelas e seções textuais com informações de identificação e histórico.

Campos esperados no CNIS:
- Nome completo do trabalhador;
- Número do CPF;
- Número de inscrição social (NIS, PIS ou PASEP);
- Data de nascimento;
- Nome da mãe (se constar);
- Órgão emissor: Normalmente \"INSS\" ou \"Ministério da Previdência Social\";
- Lista de vínculos empregatícios;

A lista de vínculos empregatícios geralmente inclui:
- CNPJ do empregador;
- Razão social;
- Data de admissão;
- Data de demissão;
- Categoria do trabalhador (ex: empregado, contribuinte individual, servidor público etc.);
- Remuneração média (quando disponível);
- Situação do vínculo (ativo, encerrado, etc.);"
            .to_string(),
        response_mime_type: JSON_MIME.to_string(),
        response_schema: Schema::object()
            .property("nome", fragments::full_name())
            .property("cpf", fragments::cpf())
            .property(
                "nis",
                Schema::string().describe("Número de inscrição social (NIS, PIS ou PASEP)."),
            )
            .property("data_nascimento", fragments::birth_date())
            .property(
                "mae",
                Schema::string().describe("Nome da mãe do trabalhador."),
            )
            .property(
                "ativo",
                Schema::boolean().describe(
                    "Indica se o trabalhador está ativo no CNIS. Se existir algum vínculo ativo, este campo deve ser true.",
                ),
            )
            .property(
                "vinculos",
                Schema::array(
                    Schema::object()
                        .property(
                            "cnpj",
                            Schema::string()
                                .describe("CNPJ do empregador no formato XX.XXX.XXX/XXXX-00."),
                        )
                        .property(
                            "razao_social",
                            Schema::string().describe("Razão social do empregador."),
                        )
                        .property(
                            "data_admissao",
                            Schema::string().format("date").describe("Data de admissão."),
                        )
                        .property(
                            "data_demissao",
                            Schema::string().format("date").describe("Data de demissão."),
                        )
                        .property(
                            "categoria",
                            Schema::string().describe("Categoria do trabalhador."),
                        )
                        .property(
                            "remuneracao_media",
                            Schema::number().describe("Remuneração média."),
                        )
                        .property(
                            "situacao",
                            Schema::string()
                                .describe("Situação do vínculo.")
                                .allowed(&["ativo", "encerrado", "suspenso", "outros"]),
                        )
                        .require(&["cnpj", "razao_social", "data_admissao", "categoria", "situacao"]),
                )
                .describe("Lista de vínculos empregatícios."),
            )
            .require(&["nome", "cpf", "nis", "data_nascimento", "vinculos"]),
    }
}

fn caepf() -> Descriptor {
    Descriptor {
        name: "Cadastro de Atividade Econômica da Pessoa Física".to_string(),
        sigla: Some("CAEPF".to_string()),
        instruction: "\
O CAEPF (Cadastro de Atividade Econômica da Pessoa Física) é um registro administrado pela Receita Federal do Brasil que identifica as atividades econômicas exercidas por pessoas físicas, como produtores rurais, profissionais autônomos, empregadores domésticos e contribuintes individuais.

O documento (comprovante ou certificado de inscrição) contém informações cadastrais da pessoa física e da atividade registrada. Ele é utilizado para fins fiscais, previdenciários e trabalhistas, e pode ser apresentado em PDF ou imagem (JPEG, PNG).

Campos esperados no CAEPF:
- Nome completo da pessoa física titular do cadastro.
- CPF do titular.
- Número de inscrição no CAEPF.
- Data de abertura ou inscrição.
- Situação atual do cadastro (ativa, suspensa, cancelada, etc.).
- Descrição da atividade econômica principal.
- Código CNAE da atividade principal.
- Endereço completo do local de atividade.
- Município.
- Unidade Federativa (estado).
- Órgão emissor, geralmente \"Receita Federal do Brasil\"."
            .to_string(),
        response_mime_type: JSON_MIME.to_string(),
        response_schema: Schema::object()
            .property("nome", fragments::full_name())
            .property("cpf", fragments::cpf())
            .property(
                "caepf",
                Schema::integer().describe("Número de inscrição no CAEPF."),
            )
            .property(
                "data_inscricao",
                Schema::string()
                    .format("date")
                    .describe("Data de abertura ou inscrição."),
            )
            .property(
                "situacao",
                Schema::string()
                    .describe("Situação atual do cadastro.")
                    .allowed(&["ativa", "suspensa", "cancelada", "outros"]),
            )
            .property(
                "atividade_principal",
                Schema::string().describe("Descrição da atividade econômica principal."),
            )
            .property(
                "codigo_cnae",
                Schema::string().describe("Código CNAE da atividade principal."),
            )
            .property("endereco", fragments::address())
            .property(
                "orgao_emissor",
                Schema::string().describe("Órgão emissor do documento."),
            )
            .require(&[
                "nome",
                "cpf",
                "caepf",
                "data_inscricao",
                "situacao",
                "atividade_principal",
                "codigo_cnae",
                "endereco",
                "orgao_emissor",
            ]),
    }
}

fn comprovante_residencia() -> Descriptor {
    Descriptor {
        name: "Comprovante de Residência".to_string(),
        sigla: None,
        instruction: "\
O Comprovante de Residência é um documento que atesta o endereço residencial de uma pessoa. Ele pode ser emitido por diversas entidades, como companhias de serviços públicos, instituições financeiras, órgãos governamentais, entre outros.

O documento pode estar em formato PDF ou imagem (JPEG, PNG), e geralmente contém informações como nome do titular, endereço completo, data de emissão e o nome da entidade emissora.

Campos esperados no Comprovante de Residência:
- Nome completo do titular do comprovante.
- Endereço completo (rua, número, complemento, bairro, cidade, estado, CEP).
- Data de emissão do documento.
- Nome da entidade emissora (ex: companhia de água, luz, banco, etc.)."
            .to_string(),
        response_mime_type: JSON_MIME.to_string(),
        response_schema: Schema::object()
            .property("nome", fragments::full_name())
            .property("cpf", fragments::cpf())
            .property("endereco", fragments::address())
            .property(
                "data_emissao",
                Schema::string()
                    .format("date")
                    .describe("Data de emissão do documento."),
            )
            .property(
                "tipo_documento",
                Schema::string().describe("Tipo de documento comprovante de residência."),
            )
            .property(
                "entidade_emissora",
                Schema::string().describe("Nome da entidade emissora"),
            )
            .require(&["nome", "cpf", "endereco", "data_emissao", "entidade_emissora"]),
    }
}

fn rgp() -> Descriptor {
    Descriptor {
        name: "Registro Geral da Pesca".to_string(),
        sigla: Some("RGP".to_string()),
        instruction: "\
O Certificado de Regularidade (Carteira RGP) é um documento emitido pelo Ministério da Pesca e Aquicultura (MPA) que comprova o registro ativo de um pescador no Registro Geral da Pesca (RGP). Ele serve como identificação oficial do pescador profissional e é obrigatório para acesso a benefícios como o Seguro-Desemprego do Pescador Artesanal (Seguro-Defeso).

Este documento normalmente apresenta informações de identificação pessoal, profissional e administrativa do registro, podendo variar conforme o layout, mas deve conter os seguintes dados principais:

Campos esperados no RGP:
- Nome completo do pescador(a).
- Número do CPF.
- Número de registro no Registro Geral da Pesca.
- Tipo de atividade exercida (ex: pescador artesanal, armador, aquicultor, etc.).
- Categoria ou subcategoria dentro da modalidade, se houver.
- Data de emissão do certificado.
- Data de validade (caso conste no documento).
- Situação do registro (ativo, suspenso, cancelado, etc.).
- Município do domicílio do pescador.
- Unidade Federativa (estado).
- Órgão emissor do documento, normalmente \"Ministério da Pesca e Aquicultura\" ou equivalente.

O documento pode estar em formato PDF ou imagem (JPEG, PNG), com logotipo oficial, brasão da República, e QR Code de autenticação."
            .to_string(),
        response_mime_type: JSON_MIME.to_string(),
        response_schema: Schema::object()
            .property("nome", fragments::full_name())
            .property("cpf", fragments::cpf())
            .property(
                "rgp",
                Schema::integer().describe("Número de registro no Registro Geral da Pesca."),
            )
            .property(
                "atividade",
                Schema::string().describe("Tipo de atividade exercida."),
            )
            .property(
                "categoria",
                Schema::string().describe("Categoria ou subcategoria dentro da modalidade."),
            )
            .property("data_emissao", fragments::issue_date())
            .property(
                "data_validade",
                Schema::string()
                    .format("date")
                    .describe("Data de validade do certificado."),
            )
            .property(
                "situacao",
                Schema::string()
                    .describe("Situação do registro.")
                    .allowed(&["ativo", "suspenso", "cancelado", "outros"]),
            )
            .property("endereco", fragments::address())
            .property(
                "orgao_emissor",
                Schema::string().describe("Órgão emissor do documento."),
            )
            .require(&[
                "nome",
                "cpf",
                "rgp",
                "atividade",
                "data_emissao",
                "situacao",
                "endereco",
                "orgao_emissor",
            ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_descriptor_declares_json_output() {
        for (id, descriptor) in entries() {
            assert_eq!(
                descriptor.response_mime_type, "application/json",
                "descriptor {} must emit JSON",
                id
            );
        }
    }

    #[test]
    fn test_siglas() {
        let siglas: Vec<Option<String>> = entries()
            .into_iter()
            .map(|(_, d)| d.sigla)
            .collect();
        // Comprovante de Residência has no standard abbreviation.
        assert_eq!(siglas.iter().filter(|s| s.is_none()).count(), 1);
    }

    #[test]
    fn test_descriptors_share_address_fragment_shape() {
        let entries = entries();
        let addresses: Vec<&Schema> = entries
            .iter()
            .filter_map(|(_, d)| d.response_schema.properties.get("endereco"))
            .collect();

        // CAEPF, Comprovante de Residência and RGP all embed the fragment.
        assert_eq!(addresses.len(), 3);
        for address in addresses {
            assert_eq!(
                address.required,
                vec!["rua", "numero", "bairro", "cidade", "estado", "cep"]
            );
        }
    }
}
