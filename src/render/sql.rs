use itertools::Itertools;

use crate::{
    api::igdb::IgdbGame,
    documents::{ServiceDescription, ServiceImages},
    normalize::NormalizedGame,
    Status,
};

/// Returns `value` as a SQL string literal, doubling embedded single quotes.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// A row of the `service` table built from an IGDB game.
#[derive(Debug, Clone)]
pub struct InsertStatement<'a> {
    pub name: &'a str,
    pub description: &'a ServiceDescription,
    pub images: &'a ServiceImages,
    pub service_id: &'a str,
}

impl<'a> InsertStatement<'a> {
    pub fn new(game: &'a IgdbGame, normalized: &'a NormalizedGame, service_id: &'a str) -> Self {
        InsertStatement {
            name: game.display_name(),
            description: &normalized.description,
            images: &normalized.images,
            service_id,
        }
    }

    /// Renders the `INSERT` statement, terminated by `;` and a newline.
    pub fn render(&self) -> Result<String, Status> {
        let values = [
            String::from("uuid_generate_v4()"),
            quote(self.name),
            quote(SERVICE_TYPE_ID),
            String::from("0000"),
            quote(SERVICE_CODE),
            quote(""),
            quote(&serde_json::to_string(self.description)?),
            quote(&serde_json::to_string(self.images)?),
            String::from("true"),
            String::from("NOW()"),
            String::from("NOW()"),
            quote(CREDIT_TYPE_ID),
            String::from("NULL"),
            String::from("NULL"),
            String::from("true"),
            quote(self.service_id),
            String::from("false"),
            String::from("false"),
            String::from("NULL"),
        ];

        Ok(format!(
            "INSERT INTO service (\n    {}\n) VALUES (\n    {}\n);\n",
            COLUMNS.iter().join(",\n    "),
            values.iter().join(",\n    "),
        ))
    }
}

/// Renders the `INSERT` statement of a normalized game.
pub fn render_insert(
    game: &IgdbGame,
    normalized: &NormalizedGame,
    service_id: &str,
) -> Result<String, Status> {
    InsertStatement::new(game, normalized, service_id).render()
}

const COLUMNS: [&str; 19] = [
    "id",
    "name",
    "service_type_id",
    "price",
    "service_code",
    "url",
    "description",
    "images",
    "active",
    "created_at",
    "updated_at",
    "credit_type_id",
    "color",
    "external_id",
    "has_stock",
    "service_id",
    "is_license",
    "marketplace_visible",
    "sale_price",
];

const SERVICE_TYPE_ID: &str = "2abbd16c-e745-4c8a-a247-2fe1a76f4343";
const CREDIT_TYPE_ID: &str = "582a1a27-09ed-46c9-b4fa-7fe1688a7839";
const SERVICE_CODE: &str = "code";
