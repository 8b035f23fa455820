//! # Embosser Protocol Implementation
//!
//! This module provides low-level byte-sequence builders for the
//! Index-style direct embossing protocol consumed by the document
//! builders.
//!
//! ## Module Structure
//!
//! - [`commands`]: Escape constants and graphic-mode framing sequences
//! - [`floating`]: Floating-dot area wire format
//!
//! ## Usage Example
//!
//! ```
//! use relieve::protocol::commands;
//!
//! // Frame a graphic-mode payload
//! let mut data = Vec::new();
//! data.extend(commands::enter_image_mode());
//! data.extend(commands::set_image_type());
//! data.push(0x07); // encoded cell bytes...
//! data.extend(commands::exit_image_mode());
//! ```
//!
//! ## Protocol Shape
//!
//! Control sequences are fixed two-byte escape codes (`ESC` + a mode
//! byte). Multi-byte integers in payloads are **little-endian**, as in
//! most embosser/receipt-printer protocols.

pub mod commands;
pub mod floating;
