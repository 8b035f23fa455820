//! # Relieve - Braille Embosser Document Library
//!
//! Relieve converts rasterized chart data into the binary protocols
//! braille embossers consume. It provides:
//!
//! - **Dot data model**: fixed-grid dot matrices and continuous
//!   floating-dot point sets
//! - **Cell encoding**: braille cells resolved to output bytes through
//!   loadable lookup tables
//! - **Protocol implementation**: Index-style escape-sequence framing
//! - **Dispatch**: capability-selected document assembly and transport
//!   hand-off
//!
//! ## Quick Start
//!
//! ```
//! use relieve::dispatch::PrintDispatcher;
//! use relieve::matrix::DotMatrix;
//! use relieve::table::BrailleTable;
//! use relieve::transport::MemoryTransport;
//!
//! // Rasterizer output: one braille cell with dots 1 and 4 raised.
//! let mut matrix = DotMatrix::new(3, 2);
//! matrix.set_value(0, 0, 1)?;
//! matrix.set_value(0, 1, 1)?;
//!
//! // Assemble for a graphic-capable embosser and hand off.
//! let table = BrailleTable::resolve("tables/index_direct_6.properties")?;
//! let mut dispatcher = PrintDispatcher::new();
//! dispatcher.configure_with_table("GRAPHIC", table)?;
//! dispatcher.attach_matrix(matrix);
//! dispatcher.assemble()?;
//!
//! let mut transport = MemoryTransport::new(); // or DeviceTransport::for_device("/dev/ttyUSB0")
//! dispatcher.send(&mut transport)?;
//! assert_eq!(transport.sent()[0], vec![0x1B, 0x05, 0x1B, 0x06, 0b001001, 0x1B, 0x07]);
//! # Ok::<(), relieve::RelieveError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cell`] | Braille cell container and bit-pattern keys |
//! | [`matrix`] | Dot matrix and cell-order traversal |
//! | [`floating`] | Floating-dot point sets |
//! | [`table`] | Bit-pattern to output-byte lookup tables |
//! | [`protocol`] | Escape-sequence and wire-format builders |
//! | [`document`] | Capability-specific document builders |
//! | [`dispatch`] | Print dispatcher state machine |
//! | [`embosser`] | Embosser hardware profiles |
//! | [`transport`] | Delivery backends |
//! | [`error`] | Error types |
//!
//! ## Supported Embossers
//!
//! Profiles ship for the Index Everest-D V4 and Basic-D V4. Other
//! embossers speaking an Index-style direct protocol work with an
//! appropriate braille table resource (see the `tables/` directory).
//!
//! ## Pipeline
//!
//! Chart geometry and rasterization happen upstream; this crate picks
//! up at the populated [`matrix::DotMatrix`] (or
//! [`floating::FloatingPointSet`]) and ends at the transport:
//!
//! ```text
//! rasterizer ──► DotMatrix ──► DocumentBuilder ──► bytes ──► Transport
//!                              (via BrailleTable)
//! ```

pub mod cell;
pub mod dispatch;
pub mod document;
pub mod embosser;
pub mod error;
pub mod floating;
pub mod matrix;
pub mod protocol;
pub mod table;
pub mod transport;

// Re-exports for convenience
pub use cell::BrailleCell;
pub use dispatch::{Capability, PrintDispatcher};
pub use document::Document;
pub use embosser::EmbosserConfig;
pub use error::RelieveError;
pub use floating::FloatingPointSet;
pub use matrix::DotMatrix;
pub use table::BrailleTable;
