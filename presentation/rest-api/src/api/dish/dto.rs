use poem_openapi::Object;

use business::domain::dish::model::DishIdentification;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct IdentifyDishRequest {
    /// A photo of a dish, as a data URI that must include a MIME type and
    /// use Base64 encoding: 'data:<mimetype>;base64,<encoded_data>'
    pub photo_data_uri: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct DishIdentificationResponse {
    /// The name of the identified dish
    pub dish_name: String,
    /// The confidence level of the identification (0-1)
    pub confidence: f64,
}

impl From<DishIdentification> for DishIdentificationResponse {
    fn from(identification: DishIdentification) -> Self {
        Self {
            dish_name: identification.dish_name,
            confidence: identification.confidence.value(),
        }
    }
}
