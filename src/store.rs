use crate::domain::Contact;
use crate::errors::AppError;

/// The authoritative in-memory collection of contacts. One instance owns the
/// whole phonebook for the lifetime of the process; nothing is persisted.
///
/// Lookup is a linear scan and duplicate names are allowed, so every
/// by-name operation acts on the earliest-inserted match.
pub struct ContactStore {
    data: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends a new contact. The only rejected input is an empty name;
    /// phone numbers are stored as given and duplicates are not checked.
    pub fn insert(&mut self, name: String, phone: String) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::Validation("Name cannot be empty".to_string()));
        }

        self.data.push(Contact::new(name, phone));
        Ok(())
    }

    /// First contact whose name matches the query, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.data
            .iter()
            .find(|contact| contact.name.eq_ignore_ascii_case(name))
    }

    /// Removes the first matching contact and returns it.
    pub fn delete_by_name(&mut self, name: &str) -> Result<Contact, AppError> {
        match self.position_by_name(name) {
            Some(index) => Ok(self.data.remove(index)),
            None => Err(AppError::NotFound("Contact".to_string())),
        }
    }

    /// Replaces the phone number of the first matching contact in place,
    /// leaving its position in the sequence unchanged.
    pub fn update_phone_by_name(&mut self, name: &str, phone: String) -> Result<(), AppError> {
        match self.position_by_name(name) {
            Some(index) => {
                self.data[index].phone = phone;
                Ok(())
            }
            None => Err(AppError::NotFound("Contact".to_string())),
        }
    }

    /// Read view of every contact in current sequence order.
    pub fn contacts(&self) -> &[Contact] {
        &self.data
    }

    pub fn iter(&self) -> ContactStoreIter<'_> {
        ContactStoreIter {
            inner: &self.data,
            idx: 0,
        }
    }

    /// Stable in-place sort by case-sensitive code-point order of the name,
    /// so "Alice" < "Bob" < "alice" and equal names keep insertion order.
    pub fn sort_by_name(&mut self) {
        self.data.sort_by(|a, b| a.name.cmp(&b.name));
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.data
            .iter()
            .position(|contact| contact.name.eq_ignore_ascii_case(name))
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ContactStoreIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for ContactStoreIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let contact = &self.inner[self.idx];
        self.idx += 1;
        Some(contact)
    }
}
