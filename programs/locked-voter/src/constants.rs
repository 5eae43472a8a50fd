pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["locker", base]
pub const LOCKER: &[u8] = b"locker";

// Seeds for PDA derivation: ["escrow", locker, owner]
pub const ESCROW: &[u8] = b"escrow";

// Seeds for PDA derivation: ["whitelist_entry", locker, program_id, owner]
// owner is Pubkey::default() for entries that apply to every escrow
pub const WHITELIST_ENTRY: &[u8] = b"whitelist_entry";
