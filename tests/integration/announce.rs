use std::io::Cursor;

use anyhow::Result;
use invwire_core::{
    decode, encode, ContentHash, Descriptor, InvError, InventoryKind, DESCRIPTOR_SIZE,
    PROTOCOL_VERSION,
};

use crate::*;

/// A one-entry announcement matches a hand-assembled byte fixture.
#[test]
fn test_single_tx_announcement_bytes() -> Result<()> {
    init_tracing();

    let hash = ContentHash::from_hex(
        "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
    )?;
    let mut payload = Vec::new();
    write_inv_payload(&mut payload, PROTOCOL_VERSION, &[Descriptor::tx(hash)])?;

    let expected = fixture(
        "01000000
         01000000
         00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
    )?;
    assert_eq!(payload, expected);
    Ok(())
}

/// Mixed kinds, including ones this build has no name for, survive a
/// full payload round trip in order.
#[test]
fn test_mixed_kind_payload_round_trip() -> Result<()> {
    init_tracing();

    let list: Vec<Descriptor> = [0u32, 1, 2, 9999, u32::MAX]
        .into_iter()
        .map(|k| Descriptor::from_parts(InventoryKind(k), ContentHash::digest(&k.to_be_bytes())))
        .collect();

    let mut payload = Vec::new();
    write_inv_payload(&mut payload, PROTOCOL_VERSION, &list)?;
    assert_eq!(payload.len(), 4 + list.len() * DESCRIPTOR_SIZE);

    let decoded = read_inv_payload(&mut Cursor::new(&payload), PROTOCOL_VERSION)?;
    assert_eq!(decoded, list);
    assert_eq!(decoded[3].kind().to_string(), "Unknown InventoryKind (9999)");
    Ok(())
}

/// A payload cut off mid-record reports truncation, not a partial list.
#[test]
fn test_truncated_announcement() -> Result<()> {
    init_tracing();

    let list = vec![
        Descriptor::block(ContentHash::digest(b"block-a")),
        Descriptor::block(ContentHash::digest(b"block-b")),
    ];
    let mut payload = Vec::new();
    write_inv_payload(&mut payload, PROTOCOL_VERSION, &list)?;
    payload.truncate(payload.len() - 1);

    match read_inv_payload(&mut Cursor::new(&payload), PROTOCOL_VERSION) {
        Err(InvError::TruncatedInput { needed, read }) => {
            assert_eq!(needed, 36);
            assert_eq!(read, 35);
        }
        other => panic!("expected TruncatedInput, got {other:?}"),
    }
    Ok(())
}

/// Descriptors built from a reused scratch buffer stay independent.
#[test]
fn test_reused_hash_buffer() -> Result<()> {
    let mut scratch = [0u8; 32];
    let mut built = Vec::new();
    for i in 0..4u8 {
        scratch.fill(i);
        built.push(Descriptor::new(InventoryKind::TX, &scratch));
    }
    scratch.fill(0xff);

    for (i, d) in built.iter().enumerate() {
        assert_eq!(d.hash().as_bytes(), &[i as u8; 32]);
    }

    let mut buf = Vec::new();
    for d in &built {
        encode(&mut buf, PROTOCOL_VERSION, d)?;
    }
    let mut cursor = Cursor::new(&buf);
    for d in &built {
        assert_eq!(&decode(&mut cursor, PROTOCOL_VERSION)?, d);
    }
    Ok(())
}
