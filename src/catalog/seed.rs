//! Demo data loaded into a fresh catalog

use crate::{
    error::AppResult,
    models::{
        book::Book,
        member::{Member, MemberType},
    },
};

use super::LibraryCatalog;

/// Id of the administrator registered by the demo data
pub const ADMIN_MEMBER_ID: &str = "123";

pub fn demo_books() -> Vec<Book> {
    vec![
        Book::new("El Aleph", "Jorge Luis Borges", 1949, "978-950-04-0406-9", 3),
        Book::new("Cien Años de Soledad", "Gabriel García Márquez", 1967, "978-84-376-0494-7", 5),
        Book::new("1984", "George Orwell", 1949, "978-0451524935", 3),
        Book::new("El Principito", "Antoine de Saint-Exupéry", 1943, "978-0156012195", 4),
        Book::new("Don Quijote de la Mancha", "Miguel de Cervantes", 1605, "978-8491050767", 2),
        Book::new("Crimen y Castigo", "Fiódor Dostoyevski", 1866, "978-0140449136", 3),
    ]
}

pub fn demo_members() -> Vec<Member> {
    vec![Member::new("Admin", ADMIN_MEMBER_ID, MemberType::Admin)]
}

pub(crate) fn load(catalog: &mut LibraryCatalog) -> AppResult<()> {
    for book in demo_books() {
        catalog.add_book(book)?;
    }
    for member in demo_members() {
        catalog.register_member(member)?;
    }
    tracing::debug!(
        "Seeded catalog with {} books and {} members",
        catalog.books().count(),
        catalog.members().count()
    );
    Ok(())
}
