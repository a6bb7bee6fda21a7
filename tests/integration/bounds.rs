use std::io::Cursor;

use anyhow::Result;
use invwire_core::{
    ContentHash, Descriptor, InvError, InventoryList, LimitsConfig, MAX_PER_MESSAGE,
    PROTOCOL_VERSION,
};

use crate::*;

fn many(n: usize) -> Vec<Descriptor> {
    (0..n as u64)
        .map(|i| Descriptor::tx(ContentHash::digest(&i.to_le_bytes())))
        .collect()
}

/// Exactly the cap goes out and comes back.
#[test]
fn test_full_announcement_at_cap() -> Result<()> {
    init_tracing();

    let list = many(MAX_PER_MESSAGE);
    let mut payload = Vec::new();
    write_inv_payload(&mut payload, PROTOCOL_VERSION, &list)?;

    let decoded = read_inv_payload(&mut Cursor::new(&payload), PROTOCOL_VERSION)?;
    assert_eq!(decoded.len(), MAX_PER_MESSAGE);
    assert_eq!(decoded.first(), list.first());
    assert_eq!(decoded.last(), list.last());
    Ok(())
}

/// One over the cap is refused before anything is written.
#[test]
fn test_oversized_announcement_rejected_on_send() {
    init_tracing();

    let list = many(MAX_PER_MESSAGE + 1);
    let mut payload = Vec::new();
    let err = write_inv_payload(&mut payload, PROTOCOL_VERSION, &list).unwrap_err();
    assert!(matches!(err, InvError::ExcessiveCount { count: 50_001, max: 50_000 }));
    assert!(payload.is_empty());
}

/// A peer claiming a huge count is refused on the prefix alone.
#[test]
fn test_hostile_count_prefix_rejected_on_receive() {
    init_tracing();

    let mut payload = u32::MAX.to_le_bytes().to_vec();
    payload.extend_from_slice(&Descriptor::tx(ContentHash::ZERO).to_bytes());

    let mut cursor = Cursor::new(&payload);
    let err = read_inv_payload(&mut cursor, PROTOCOL_VERSION).unwrap_err();
    assert!(err.is_excessive_count());
    assert_eq!(cursor.position(), 4, "only the prefix may be consumed");
}

/// A configured limit tightens the cap for lists built locally.
#[test]
fn test_configured_limit_applies_to_inventory_list() -> Result<()> {
    let config = LimitsConfig::from_toml_str("max_per_message = 3")?;

    let mut list = InventoryList::with_limit(config.effective_max_per_message());
    for d in many(3) {
        list.push(d)?;
    }
    assert!(list.push(Descriptor::tx(ContentHash::ZERO)).unwrap_err().is_excessive_count());

    let mut out = Vec::new();
    list.write_to(&mut out, PROTOCOL_VERSION)?;
    let back = InventoryList::read_from(
        &mut Cursor::new(&out),
        PROTOCOL_VERSION,
        3,
        config.effective_max_per_message(),
    )?;
    assert_eq!(back, list);
    Ok(())
}
