use std::path::Path;

use snap::raw::Decoder;

/// Read a snappy-compressed SSZ file and return the raw SSZ bytes.
pub fn read_ssz_snappy(path: &Path) -> Option<Vec<u8>> {
    let ssz_snappy = std::fs::read(path).ok()?;
    Decoder::new().decompress_vec(&ssz_snappy).ok()
}
