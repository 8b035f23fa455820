//! # Print Dispatch
//!
//! The dispatcher ties the pipeline together: it selects a document
//! builder from the embosser's declared capability, validates that the
//! attached data matches, assembles, and hands the buffer to a
//! transport.
//!
//! ## State Machine
//!
//! ```text
//! Created ──configure──► Configured ──assemble──► Assembled ──send──► Sent
//! ```
//!
//! `Sent` is terminal whether or not the transport succeeded — a
//! failed hand-off surfaces as an error, but the dispatcher does not
//! retry or attempt partial prints. Retries are the caller's concern,
//! with a fresh dispatcher.
//!
//! ## Capability Selection
//!
//! Capability tags come from embosser configuration. Unknown tags fall
//! back to `PLAIN` — every embosser handles the unframed cell stream,
//! so this is a documented policy default, not an error.

use std::path::Path;

use crate::document::{
    Document, FloatingDotAreaBuilder, GraphicPrintBuilder, NormalBuilder,
};
use crate::error::RelieveError;
use crate::floating::FloatingPointSet;
use crate::matrix::DotMatrix;
use crate::table::BrailleTable;
use crate::transport::Transport;

/// # Printer Capability
///
/// The embosser's declared support level, which determines the
/// document-assembly protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Unframed cell stream; supported by every embosser.
    Plain,
    /// Image-mode framing for graphic firmware.
    Graphic,
    /// Continuous-coordinate embossing.
    FloatingDot,
}

impl Capability {
    /// Parse a configuration tag, case-insensitively. Unknown tags map
    /// to [`Capability::Plain`] (documented fallback, never an error).
    ///
    /// ## Example
    ///
    /// ```
    /// use relieve::dispatch::Capability;
    ///
    /// assert_eq!(Capability::from_tag("GRAPHIC"), Capability::Graphic);
    /// assert_eq!(Capability::from_tag("floating_dot"), Capability::FloatingDot);
    /// assert_eq!(Capability::from_tag("holographic"), Capability::Plain);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "GRAPHIC" => Self::Graphic,
            "FLOATING_DOT" => Self::FloatingDot,
            _ => Self::Plain,
        }
    }

    /// The canonical configuration tag for this capability.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Plain => "PLAIN",
            Self::Graphic => "GRAPHIC",
            Self::FloatingDot => "FLOATING_DOT",
        }
    }
}

/// Dispatcher lifecycle state. See module docs for the transition
/// diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Created,
    Configured,
    Assembled,
    Sent,
}

/// Input data for one print run: a rasterized grid or a floating
/// point set, depending on capability.
#[derive(Debug, Clone)]
pub enum PrintSource {
    Matrix(DotMatrix),
    Points(FloatingPointSet),
}

/// The builder variant selected at configuration time. Tagged variants
/// rather than per-call type checks: the choice happens once.
#[derive(Debug, Clone)]
enum SelectedBuilder {
    Normal(NormalBuilder),
    Graphic(GraphicPrintBuilder),
    Floating(FloatingDotAreaBuilder),
}

/// # Print Dispatcher
///
/// Drives one print run through
/// `Created → Configured → Assembled → Sent`.
///
/// ## Example
///
/// ```
/// use relieve::dispatch::PrintDispatcher;
/// use relieve::matrix::DotMatrix;
/// use relieve::table::BrailleTable;
/// use relieve::transport::MemoryTransport;
///
/// let table = BrailleTable::from_properties_str("000000=32\n")?;
/// let mut dispatcher = PrintDispatcher::new();
/// dispatcher.configure_with_table("PLAIN", table)?;
/// dispatcher.attach_matrix(DotMatrix::new(3, 2));
/// dispatcher.assemble()?;
///
/// let mut transport = MemoryTransport::new();
/// dispatcher.send(&mut transport)?;
/// assert_eq!(transport.sent(), &[vec![32]]);
/// # Ok::<(), relieve::RelieveError>(())
/// ```
#[derive(Debug)]
pub struct PrintDispatcher {
    state: DispatchState,
    capability: Capability,
    builder: Option<SelectedBuilder>,
    source: Option<PrintSource>,
    document: Option<Document>,
}

impl PrintDispatcher {
    /// Create a dispatcher in the `Created` state.
    pub fn new() -> Self {
        Self {
            state: DispatchState::Created,
            capability: Capability::Plain,
            builder: None,
            source: None,
            document: None,
        }
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// The capability selected at configuration time.
    #[inline]
    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// The assembled document, if assembly has happened.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// `Created → Configured`: select a builder from a capability tag,
    /// loading the braille table from `table_path` for the cell-based
    /// capabilities. Floating dot needs no table and does not touch
    /// the path.
    ///
    /// ## Errors
    ///
    /// Table loading errors ([`RelieveError::Io`],
    /// [`RelieveError::UnsupportedFormat`],
    /// [`RelieveError::InvalidValue`]) propagate unchanged; an
    /// already-configured dispatcher reports
    /// [`RelieveError::InvalidValue`].
    pub fn configure<P: AsRef<Path>>(
        &mut self,
        capability_tag: &str,
        table_path: P,
    ) -> Result<(), RelieveError> {
        let capability = Capability::from_tag(capability_tag);
        match capability {
            Capability::FloatingDot => self.configure_floating(capability_tag),
            _ => {
                self.ensure_created()?;
                let table = BrailleTable::resolve(table_path)?;
                self.configure_with_table(capability_tag, table)
            }
        }
    }

    /// `Created → Configured` with an already-loaded table. The tag is
    /// re-parsed here so unknown tags get the same `PLAIN` fallback as
    /// [`PrintDispatcher::configure`].
    ///
    /// ## Errors
    ///
    /// [`RelieveError::InvalidValue`] when the dispatcher has left the
    /// `Created` state.
    pub fn configure_with_table(
        &mut self,
        capability_tag: &str,
        table: BrailleTable,
    ) -> Result<(), RelieveError> {
        self.ensure_created()?;
        let capability = Capability::from_tag(capability_tag);
        let builder = match capability {
            Capability::Graphic => SelectedBuilder::Graphic(GraphicPrintBuilder::new(table)),
            // Plain, and the fallback for unknown tags.
            _ => SelectedBuilder::Normal(NormalBuilder::new(table)),
        };
        self.capability = capability;
        self.builder = Some(builder);
        self.state = DispatchState::Configured;
        Ok(())
    }

    /// `Created → Configured` for the floating-dot capability, which
    /// has no table dependency.
    ///
    /// ## Errors
    ///
    /// [`RelieveError::InvalidValue`] when `capability_tag` does not
    /// name the floating-dot capability, or when the dispatcher has
    /// left the `Created` state.
    pub fn configure_floating(&mut self, capability_tag: &str) -> Result<(), RelieveError> {
        self.ensure_created()?;
        if Capability::from_tag(capability_tag) != Capability::FloatingDot {
            return Err(RelieveError::InvalidValue(format!(
                "'{}' is not the floating-dot capability",
                capability_tag
            )));
        }
        self.capability = Capability::FloatingDot;
        self.builder = Some(SelectedBuilder::Floating(FloatingDotAreaBuilder::new()));
        self.state = DispatchState::Configured;
        Ok(())
    }

    /// Supply the dot matrix for a cell-based print run.
    pub fn attach_matrix(&mut self, matrix: DotMatrix) {
        self.source = Some(PrintSource::Matrix(matrix));
    }

    /// Supply the point set for a floating-dot print run.
    pub fn attach_points(&mut self, points: FloatingPointSet) {
        self.source = Some(PrintSource::Points(points));
    }

    /// `Configured → Assembled`: run the selected builder over the
    /// attached source.
    ///
    /// ## Errors
    ///
    /// - [`RelieveError::NullInput`] when no source is attached, or
    ///   the source kind does not match the capability
    /// - builder errors (missing table keys, invalid coordinates)
    ///   propagate unchanged
    /// - [`RelieveError::InvalidValue`] when called outside the
    ///   `Configured` state
    pub fn assemble(&mut self) -> Result<&Document, RelieveError> {
        let (Some(builder), DispatchState::Configured) = (self.builder.as_ref(), self.state)
        else {
            return Err(self.wrong_state("assemble"));
        };

        let document = match (builder, &self.source) {
            (_, None) => {
                return Err(RelieveError::NullInput(
                    "no print data attached".to_string(),
                ));
            }
            (SelectedBuilder::Normal(b), Some(PrintSource::Matrix(m))) => b.assemble(m)?,
            (SelectedBuilder::Graphic(b), Some(PrintSource::Matrix(m))) => b.assemble(m)?,
            (SelectedBuilder::Floating(b), Some(PrintSource::Points(p))) => b.assemble(p)?,
            (SelectedBuilder::Floating(_), Some(PrintSource::Matrix(_))) => {
                return Err(RelieveError::NullInput(
                    "floating-dot capability requires a point set, got a dot matrix"
                        .to_string(),
                ));
            }
            (_, Some(PrintSource::Points(_))) => {
                return Err(RelieveError::NullInput(format!(
                    "{} capability requires a dot matrix, got a point set",
                    self.capability.tag()
                )));
            }
        };

        self.state = DispatchState::Assembled;
        Ok(self.document.insert(document))
    }

    /// `Assembled → Sent`: hand the buffer to a transport.
    ///
    /// `Sent` is entered before the transport verdict is known, so the
    /// dispatcher is terminal afterwards even when the hand-off failed.
    ///
    /// ## Errors
    ///
    /// - [`RelieveError::TransportRejected`] from the transport,
    ///   unchanged
    /// - [`RelieveError::InvalidValue`] when called outside the
    ///   `Assembled` state
    pub fn send(&mut self, transport: &mut dyn Transport) -> Result<(), RelieveError> {
        let (Some(document), DispatchState::Assembled) = (self.document.as_ref(), self.state)
        else {
            return Err(self.wrong_state("send"));
        };

        self.state = DispatchState::Sent;
        transport.send(document.as_bytes())
    }

    /// `Assembled → Sent` against a device name, resolving the device
    /// transport first.
    ///
    /// ## Errors
    ///
    /// [`RelieveError::TransportUnavailable`] when no device matches
    /// `device`; otherwise as [`PrintDispatcher::send`]. The
    /// dispatcher reaches `Sent` in every case.
    pub fn send_to_device(&mut self, device: &str) -> Result<(), RelieveError> {
        let (Some(document), DispatchState::Assembled) = (self.document.as_ref(), self.state)
        else {
            return Err(self.wrong_state("send"));
        };
        self.state = DispatchState::Sent;

        let mut transport = crate::transport::DeviceTransport::for_device(device)?;
        transport.send(document.as_bytes())
    }

    /// Configuration happens exactly once; a dispatcher past `Created`
    /// (including the terminal `Sent`) refuses to be re-armed.
    fn ensure_created(&self) -> Result<(), RelieveError> {
        match self.state {
            DispatchState::Created => Ok(()),
            _ => Err(self.wrong_state("configure")),
        }
    }

    fn wrong_state(&self, operation: &str) -> RelieveError {
        RelieveError::InvalidValue(format!(
            "cannot {} in the {:?} state",
            operation, self.state
        ))
    }
}

impl Default for PrintDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
