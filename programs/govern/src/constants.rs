pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["governor", base]
pub const GOVERNOR: &[u8] = b"governor";

// Seeds for PDA derivation: ["proposal", governor, index]
pub const PROPOSAL: &[u8] = b"proposal";

// Seeds for PDA derivation: ["proposal_meta", proposal]
pub const PROPOSAL_META: &[u8] = b"proposal_meta";

// Seeds for PDA derivation: ["vote", proposal, voter]
pub const VOTE: &[u8] = b"vote";

// ProposalMeta limits (bytes)
pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_DESCRIPTION_LINK_LEN: usize = 256;

// Upper bounds on the instruction list stored on a Proposal
pub const MAX_PROPOSAL_INSTRUCTIONS: usize = 4;
pub const MAX_INSTRUCTION_KEYS: usize = 12;
pub const MAX_INSTRUCTION_DATA_LEN: usize = 256;
