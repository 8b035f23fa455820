//! # Pipeline Tests
//!
//! End-to-end tests over the public API: rasterized input through
//! document assembly and dispatch to captured output bytes, using the
//! braille tables shipped in `tables/`.
//!
//! The shipped Index direct-protocol table maps every bit pattern to
//! its dot bitmask (dot 1 = bit 0 ... dot 6 = bit 5), which makes
//! expected bytes easy to compute by hand.

use pretty_assertions::assert_eq;

use relieve::dispatch::{DispatchState, PrintDispatcher};
use relieve::document::{FloatingDotAreaBuilder, GraphicPrintBuilder, NormalBuilder};
use relieve::matrix::DotMatrix;
use relieve::table::BrailleTable;
use relieve::transport::{MemoryTransport, Transport};
use relieve::{Capability, FloatingPointSet, RelieveError};

/// Path to the shipped properties table
const TABLE_PROPERTIES: &str = "tables/index_direct_6.properties";

/// Path to the shipped JSON table
const TABLE_JSON: &str = "tables/index_direct_6.json";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// A 6x4 matrix: four cells with dot patterns chosen per cell.
/// `cells` gives each cell's raised dots as slot indices (0..6), in
/// block order: (0,0) (0,1) (1,0) (1,1).
fn matrix_with_cells(cells: [&[usize]; 4]) -> DotMatrix {
    let mut matrix = DotMatrix::new(6, 4);
    for (block, slots) in cells.iter().enumerate() {
        let base_row = (block / 2) * 3;
        let base_column = (block % 2) * 2;
        for &slot in *slots {
            let row = base_row + slot % 3;
            let column = base_column + slot / 3;
            matrix.set_value(row, column, 1).unwrap();
        }
    }
    matrix
}

fn bitmask(slots: &[usize]) -> u8 {
    slots.iter().fold(0, |acc, &s| acc | 1 << s)
}

// ============================================================================
// CELL PIPELINE
// ============================================================================

#[test]
fn test_plain_pipeline_one_byte_per_cell() {
    let cells: [&[usize]; 4] = [&[0], &[0, 1], &[2, 5], &[0, 1, 2, 3, 4, 5]];
    let matrix = matrix_with_cells(cells);

    let table = BrailleTable::resolve(TABLE_PROPERTIES).unwrap();
    let doc = NormalBuilder::new(table).assemble(&matrix).unwrap();

    let expected: Vec<u8> = cells.iter().map(|slots| bitmask(slots)).collect();
    assert_eq!(doc.as_bytes(), &expected[..]);
}

#[test]
fn test_graphic_pipeline_frames_plain_payload() {
    let cells: [&[usize]; 4] = [&[1, 4], &[], &[3], &[0, 5]];
    let matrix = matrix_with_cells(cells);

    let table = BrailleTable::resolve(TABLE_PROPERTIES).unwrap();
    let plain = NormalBuilder::new(table.clone()).assemble(&matrix).unwrap();
    let graphic = GraphicPrintBuilder::new(table).assemble(&matrix).unwrap();

    let mut expected = vec![0x1B, 0x05, 0x1B, 0x06];
    expected.extend_from_slice(plain.as_bytes());
    expected.extend([0x1B, 0x07]);
    assert_eq!(graphic.as_bytes(), &expected[..]);
}

#[test]
fn test_json_and_properties_tables_interchangeable() {
    let matrix = matrix_with_cells([&[0, 2, 4], &[1], &[], &[5]]);

    let from_properties = NormalBuilder::new(BrailleTable::resolve(TABLE_PROPERTIES).unwrap())
        .assemble(&matrix)
        .unwrap();
    let from_json = NormalBuilder::new(BrailleTable::resolve(TABLE_JSON).unwrap())
        .assemble(&matrix)
        .unwrap();

    assert_eq!(from_properties.as_bytes(), from_json.as_bytes());
}

#[test]
fn test_assembly_deterministic() {
    let matrix = matrix_with_cells([&[0, 3], &[1, 2, 4], &[5], &[]]);
    let table = BrailleTable::resolve(TABLE_PROPERTIES).unwrap();
    let builder = GraphicPrintBuilder::new(table);

    let first = builder.assemble(&matrix).unwrap();
    let second = builder.assemble(&matrix).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

// ============================================================================
// FLOATING PIPELINE
// ============================================================================

#[test]
fn test_floating_pipeline_insertion_order() {
    let mut points = FloatingPointSet::new();
    points.push(12.0, 34.0, 1); // (120, 340)
    points.push(0.5, 0.0, 9); // (5, 0)

    let doc = FloatingDotAreaBuilder::new().assemble(&points).unwrap();
    assert_eq!(
        doc.as_bytes(),
        &[
            0x1B, 0x46, 0x02, 0x00, // begin area, 2 points
            0x78, 0x00, 0x54, 0x01, 1, // (120, 340) intensity 1
            0x05, 0x00, 0x00, 0x00, 9, // (5, 0) intensity 9
            0x1B, 0x45, // end area
        ]
    );
}

// ============================================================================
// DISPATCH
// ============================================================================

#[test]
fn test_dispatcher_full_run_reaches_sent() {
    let matrix = matrix_with_cells([&[0], &[], &[], &[]]);

    let mut dispatcher = PrintDispatcher::new();
    dispatcher.configure("GRAPHIC", TABLE_PROPERTIES).unwrap();
    dispatcher.attach_matrix(matrix);
    dispatcher.assemble().unwrap();

    let mut transport = MemoryTransport::new();
    dispatcher.send(&mut transport).unwrap();

    assert_eq!(dispatcher.state(), DispatchState::Sent);
    assert_eq!(dispatcher.capability(), Capability::Graphic);
    assert_eq!(
        transport.sent()[0],
        vec![0x1B, 0x05, 0x1B, 0x06, 1, 0, 0, 0, 0x1B, 0x07]
    );
}

#[test]
fn test_unknown_capability_matches_plain() {
    let matrix = matrix_with_cells([&[1, 2], &[0], &[4], &[3, 5]]);

    let assemble_with = |tag: &str| -> Vec<u8> {
        let mut dispatcher = PrintDispatcher::new();
        dispatcher.configure(tag, TABLE_PROPERTIES).unwrap();
        dispatcher.attach_matrix(matrix.clone());
        dispatcher.assemble().unwrap().as_bytes().to_vec()
    };

    assert_eq!(assemble_with("DAISY_WHEEL"), assemble_with("PLAIN"));
}

#[test]
fn test_dispatcher_propagates_missing_key() {
    // A table too small for the data: only the blank cell is mapped.
    let table = BrailleTable::from_properties_str("000000=0\n").unwrap();
    let matrix = matrix_with_cells([&[0], &[], &[], &[]]);

    let mut dispatcher = PrintDispatcher::new();
    dispatcher.configure_with_table("PLAIN", table).unwrap();
    dispatcher.attach_matrix(matrix);

    match dispatcher.assemble() {
        Err(RelieveError::MissingKey(key)) => assert_eq!(key, "100000"),
        other => panic!("expected MissingKey, got {:?}", other),
    }
}

#[test]
fn test_rejected_transport_still_terminal() {
    let mut dispatcher = PrintDispatcher::new();
    dispatcher.configure("PLAIN", TABLE_JSON).unwrap();
    dispatcher.attach_matrix(matrix_with_cells([&[], &[], &[], &[]]));
    dispatcher.assemble().unwrap();

    let mut transport = MemoryTransport::rejecting("paper jam");
    assert!(dispatcher.send(&mut transport).is_err());
    assert_eq!(dispatcher.state(), DispatchState::Sent);

    // A fresh dispatcher is needed for a retry; the old one refuses.
    let mut retry_transport = MemoryTransport::new();
    assert!(dispatcher.send(&mut retry_transport).is_err());
    assert!(retry_transport.sent().is_empty());
}

#[test]
fn test_sent_dispatcher_refuses_reconfigure() {
    let mut dispatcher = PrintDispatcher::new();
    dispatcher.configure("PLAIN", TABLE_PROPERTIES).unwrap();
    dispatcher.attach_matrix(matrix_with_cells([&[0], &[], &[], &[]]));
    dispatcher.assemble().unwrap();

    let mut transport = MemoryTransport::new();
    dispatcher.send(&mut transport).unwrap();
    assert_eq!(dispatcher.state(), DispatchState::Sent);

    // A second run takes a fresh dispatcher; the spent one cannot be
    // re-armed and driven through another assemble and send.
    assert!(matches!(
        dispatcher.configure("PLAIN", TABLE_PROPERTIES),
        Err(RelieveError::InvalidValue(_))
    ));
    assert_eq!(dispatcher.state(), DispatchState::Sent);
    assert!(dispatcher.assemble().is_err());
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn test_send_accepts_any_transport_impl() {
    struct CountingTransport(usize);
    impl Transport for CountingTransport {
        fn send(&mut self, data: &[u8]) -> Result<(), RelieveError> {
            self.0 += data.len();
            Ok(())
        }
    }

    let mut dispatcher = PrintDispatcher::new();
    dispatcher.configure("PLAIN", TABLE_PROPERTIES).unwrap();
    dispatcher.attach_matrix(DotMatrix::new(3, 2));
    dispatcher.assemble().unwrap();

    let mut transport = CountingTransport(0);
    dispatcher.send(&mut transport).unwrap();
    assert_eq!(transport.0, 1); // one cell, one byte, no framing
}
