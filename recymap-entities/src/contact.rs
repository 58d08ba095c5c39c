/// How to reach the operator of a drop-off point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Contact {
    /// `true` if no field carries any text.
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .into_iter()
            .all(|field| field.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}
