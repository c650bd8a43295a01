/// A single phonebook record. Name is the lookup key; phone is free-form
/// text and never validated.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: String, phone: String) -> Self {
        Contact { name, phone }
    }
}
