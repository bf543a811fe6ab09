//! Shared field-level schema fragments.
//!
//! The same person-identification fields recur across every document type.
//! Declaring them once keeps the extracted JSON shape consistent between
//! descriptors. Field keys and descriptions are the Portuguese wire contract
//! of the extracted output; only the constructors are English.

use gemini_client::Schema;

/// `nome` — full name of the person the document refers to.
pub fn full_name() -> Schema {
    Schema::string().describe("Nome completo da pessoa referida no documento.")
}

/// `cpf` — tax identifier, formatted `000.000.000-00`.
pub fn cpf() -> Schema {
    Schema::string()
        .describe("Número do CPF da pessoa referida no documento, no formato 000.000.000-00.")
        .nullable()
}

/// `data_nascimento` — ISO birth date.
pub fn birth_date() -> Schema {
    Schema::string()
        .format("date")
        .describe("Data de nascimento da pessoa referida no documento formato YYYY-MM-DD.")
        .nullable()
}

/// `data_emissao` — ISO issue date, only when explicit in the document.
pub fn issue_date() -> Schema {
    Schema::string()
        .format("date")
        .describe("Data de emissão do documento, deve ser explícita no documento formato YYYY-MM-DD.")
        .nullable()
}

/// `endereco` — composite address fragment with its own required list.
pub fn address() -> Schema {
    Schema::object()
        .describe("Endereço completo referente ao documento, ex.: residência, local de atividade, etc.")
        .property("rua", Schema::string().describe("Nome da rua."))
        .property(
            "numero",
            Schema::string().describe("Número da residência.").nullable(),
        )
        .property(
            "complemento",
            Schema::string().describe("Complemento do endereço.").nullable(),
        )
        .property("bairro", Schema::string().describe("Bairro."))
        .property(
            "cidade",
            Schema::string().describe("Cidade, município, localidade."),
        )
        .property(
            "estado",
            Schema::string().describe(
                "Estado, sigla de duas letras. Caso esteja presente o nome completo, converta para sigla.",
            ),
        )
        .property(
            "cep",
            Schema::string().describe("CEP no formato 00000-000.").nullable(),
        )
        .require(&["rua", "numero", "bairro", "cidade", "estado", "cep"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_required_fields_all_exist() {
        assert!(address().missing_required().is_empty());
    }

    #[test]
    fn test_nullable_fragments() {
        assert!(cpf().nullable);
        assert!(birth_date().nullable);
        assert!(issue_date().nullable);
        assert!(!full_name().nullable);
    }

    #[test]
    fn test_date_fragments_carry_format_tag() {
        assert_eq!(birth_date().format.as_deref(), Some("date"));
        assert_eq!(issue_date().format.as_deref(), Some("date"));
    }
}
