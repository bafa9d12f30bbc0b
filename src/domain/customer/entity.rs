// ============================================================================
// Customer Entity - the stored document
// ============================================================================

/// A customer record as held by a `CustomerStore`.
///
/// `id` is `None` until the store assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Customer {
    pub id: Option<String>,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub city: String,
}

impl Customer {
    #[allow(dead_code)]
    pub fn new(
        id: Option<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        gender: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            firstname: firstname.into(),
            lastname: lastname.into(),
            email: email.into(),
            phone: phone.into(),
            gender: gender.into(),
            city: city.into(),
        }
    }
}
