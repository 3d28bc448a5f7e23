//! Sample record fixtures.
//!
//! # Example
//!
//! ```
//! use collectforge_test::person::people;
//!
//! let people = people();
//! assert_eq!(people.len(), 5);
//! assert_eq!(people[0].name, "Ada");
//! ```

/// A person with a name, an age and a home city.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub city: String,
}

impl Person {
    /// Creates a person.
    pub fn new(name: &str, age: u32, city: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            city: city.to_string(),
        }
    }

    /// Returns `true` for people aged 18 or over.
    pub fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

/// Five people across three cities; two share an age and two share a name.
///
/// | name  | age | city   |
/// |-------|-----|--------|
/// | Ada   | 36  | London |
/// | Grace | 17  | Paris  |
/// | Alan  | 41  | London |
/// | Ada   | 17  | Berlin |
/// | Linus | 29  | Paris  |
pub fn people() -> Vec<Person> {
    vec![
        Person::new("Ada", 36, "London"),
        Person::new("Grace", 17, "Paris"),
        Person::new("Alan", 41, "London"),
        Person::new("Ada", 17, "Berlin"),
        Person::new("Linus", 29, "Paris"),
    ]
}
