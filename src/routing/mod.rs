pub mod location;
pub mod nav;
pub mod router;
pub mod table;

pub use self::location::Location;
pub use self::nav::{NavLink, NavLinks};
pub use self::router::{ClickOutcome, DEFAULT_ROUTE, HashRouter, RouteOutcome};
pub use self::table::{Route, RouteTable, RouteTableError};
