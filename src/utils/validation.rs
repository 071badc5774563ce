//! Utilidades de validación
//!
//! Validadores de formato que el derive de `validator` no cubre:
//! patentes y DNI, con sus expresiones regulares compiladas una sola vez.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // Patentes formato viejo (ABC123) y formato Mercosur (AB123CD)
    static ref LICENSE_PLATE_RE: Regex =
        Regex::new(r"^([A-Z]{3}\d{3}|[A-Z]{2}\d{3}[A-Z]{2})$").unwrap();
    // DNI argentino: 7 u 8 dígitos
    static ref DNI_RE: Regex = Regex::new(r"^\d{7,8}$").unwrap();
}

/// Validar formato de patente de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = value.trim().replace([' ', '-'], "").to_uppercase();
    if !LICENSE_PLATE_RE.is_match(&clean_plate) {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"ABC123 o AB123CD".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de DNI
pub fn validate_dni(value: &str) -> Result<(), ValidationError> {
    if !DNI_RE.is_match(value.trim()) {
        let mut error = ValidationError::new("dni");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"7 u 8 dígitos".to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_plate_formats() {
        assert!(validate_license_plate("ABC123").is_ok());
        assert!(validate_license_plate("AB123CD").is_ok());
        assert!(validate_license_plate("ab 123 cd").is_ok());
        assert!(validate_license_plate("A123").is_err());
        assert!(validate_license_plate("ABCD1234").is_err());
        assert!(validate_license_plate("").is_err());
    }

    #[test]
    fn test_dni_format() {
        assert!(validate_dni("12345678").is_ok());
        assert!(validate_dni("1234567").is_ok());
        assert!(validate_dni("123456").is_err());
        assert!(validate_dni("123456789").is_err());
        assert!(validate_dni("12a45678").is_err());
    }
}
