//! NIDS binary block layouts (§6.1): Message Header, Product Description, Product Symbology,
//! and the Radial Data block that carries the actual moment data.

pub mod message_header;
pub mod product_description;
pub mod product_symbology;
pub mod radial_set;

pub use message_header::MessageHeader;
pub use product_description::ProductDescription;
pub use product_symbology::ProductSymbology;
pub use radial_set::RadialSetBlock;
