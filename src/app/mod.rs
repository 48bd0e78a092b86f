// Application layer: routes, customer and vendor pages, and the session that
// ties customer pages to one cart.

pub mod customer;
pub mod router;
pub mod session;
pub mod shell;
pub mod vendor;

pub use router::Route;
pub use session::{CustomerScreen, CustomerSession};
pub use shell::{CustomerShell, ShellCommand, ShellReply};
