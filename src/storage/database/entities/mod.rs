/// Todo entity module
pub mod todo;

pub use todo::Entity as Todo;
