//! Multiplier packer.
//!
//! Splits one function's floor count into replicated blocks, each
//! represented by a single template floor instance carrying an integer
//! multiplier. The per-block cap is an engineering limit on how many real
//! floors one simulated floor may stand in for before solar and shading
//! fidelity degrades too far.

/// Packs `floor_count` floors into the fewest blocks of size at most
/// `per_block_cap`.
///
/// Returns block sizes summing exactly to `floor_count`. Block count is
/// `ceil(floor_count / per_block_cap)`; sizes are equalized, with any
/// remainder carried by the last block.
pub fn pack(floor_count: u32, per_block_cap: u32) -> Vec<u32> {
    debug_assert!(per_block_cap >= 1);
    if floor_count == 0 {
        return Vec::new();
    }
    let blocks = floor_count.div_ceil(per_block_cap);
    if blocks == 1 {
        return vec![floor_count];
    }
    let multiplier = floor_count.div_ceil(blocks);
    if floor_count % multiplier == 0 {
        vec![multiplier; blocks as usize]
    } else {
        let mut sizes = vec![multiplier; (blocks - 1) as usize];
        sizes.push(floor_count % multiplier);
        sizes
    }
}
