use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para dar de alta un valor de lookup (categoría o tipo)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLookupRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
}

// Estado válido para un ámbito (vehículos o alquileres), con su etiqueta
#[derive(Debug, Serialize)]
pub struct StatusEntry {
    pub value: &'static str,
    pub label: &'static str,
}
