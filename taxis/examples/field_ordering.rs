//! Ordering configuration fields by declared dependency
//!
//! A miniature of the intended use: a set of person-record fields where some
//! fields are computed from others, resolved into the order they must be
//! filled in.
//!
//! ## Scenario
//! `FullName` needs `FirstName` and `LastName`; `Age` needs `DateOfBirth`.
//! The resolver returns the field actions in an order where every computed
//! field comes after its inputs.
//!
//! ## Run with
//! ```bash
//! cargo run --example field_ordering
//! ```

use taxis::{resolve, Dependent, ResolveError};

fn main() -> Result<(), ResolveError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let fields = vec![
        Dependent::new("FirstName", "ask for a first name"),
        Dependent::new("FullName", "join first and last name").depends_on(["FirstName", "LastName"]),
        Dependent::new("Age", "derive from date of birth").depends_on(["DateOfBirth"]),
        Dependent::new("LastName", "ask for a last name"),
        Dependent::new("DateOfBirth", "ask for a date of birth"),
    ];

    for (position, action) in resolve(fields)?.into_iter().enumerate() {
        println!("{}. {}", position + 1, action);
    }

    Ok(())
}
