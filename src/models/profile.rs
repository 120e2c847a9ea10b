use serde::Serialize;
use utoipa::ToSchema;

/// Villages offered by the profile editor.
pub const VILLAGES: &[&str] = &[
    "Vereda San Rafael",
    "Vereda San Diego",
    "Vereda El Triunfo",
    "Vereda La Primavera",
    "Vereda El Rosal",
    "Vereda La Esperanza",
    "Vereda Los Pinos",
    "Vereda San Antonio",
    "Vereda El Paraíso",
    "Vereda El Carmen",
    "Vereda El Roble",
    "Vereda La Palma",
    "Vereda Santa Rosa",
    "Vereda El Placer",
    "Vereda La Cumbre",
    "Vereda Las Delicias",
    "Vereda La Floresta",
    "Vereda Los Ángeles",
    "Vereda La Unión",
    "Vereda Monteverde",
    "Vereda Alto Bonito",
    "Vereda El Edén",
    "Vereda Campo Hermoso",
    "Vereda La Loma",
    "Vereda Las Brisas",
    "Vereda El Jardín",
    "Vereda Bella Vista",
    "Vereda El Mirador",
    "Vereda San José",
    "Vereda La Ceiba",
    "Vereda El Progreso",
    "Vereda El Nogal",
];

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    /// Read-only once the profile exists.
    pub email: String,
    pub phone: String,
    pub address: String,
    pub village: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            first_name: "Elynn".to_string(),
            last_name: "Lee".to_string(),
            email: "elynn.lee@example.com".to_string(),
            phone: "30122359878".to_string(),
            address: "Morales".to_string(),
            village: "Vereda San Diego".to_string(),
        }
    }
}
