// Test utilities for the locked-voter program
#![cfg(feature = "test-sbf")]
#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use sha2::{Digest, Sha256};
use solana_sdk::{
    clock::Clock,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;
use spl_associated_token_account::get_associated_token_address;

// Program IDs matching declare_id!
pub const LOCKED_VOTER_PROGRAM_ID: Pubkey = Pubkey::new_from_array(locked_voter::ID.to_bytes());
pub const GOVERN_PROGRAM_ID: Pubkey = Pubkey::new_from_array(govern::ID.to_bytes());
// Matches declare_id! in programs/whitelist-tester
pub const WHITELIST_TESTER_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
pub const INSTRUCTIONS_SYSVAR_ID: Pubkey = Pubkey::new_from_array(
    anchor_lang::solana_program::sysvar::instructions::ID.to_bytes(),
);

// PDA Seeds
pub const LOCKER: &[u8] = b"locker";
pub const ESCROW: &[u8] = b"escrow";
pub const WHITELIST_ENTRY: &[u8] = b"whitelist_entry";
pub const GOVERNOR: &[u8] = b"governor";
pub const PROPOSAL: &[u8] = b"proposal";
pub const VOTE: &[u8] = b"vote";

// Token decimals
pub const DECIMALS: u8 = 6;

// LiteSVM starts the clock at 0, which the programs treat as "unset"
pub const START_TIMESTAMP: i64 = 1_700_000_000;

// Vote sides (must match govern's VoteSide)
pub const SIDE_AGAINST: u8 = 1;
pub const SIDE_FOR: u8 = 2;

// LockedVoterError codes (6000 + variant index)
pub const ERROR_LOCKUP_DURATION_TOO_SHORT: u32 = 6000;
pub const ERROR_ESCROW_NOT_ENDED: u32 = 6001;
pub const ERROR_PROGRAM_NOT_WHITELISTED: u32 = 6002;
pub const ERROR_INSUFFICIENT_ACTIVATION_POWER: u32 = 6003;
pub const ERROR_UNAUTHORIZED: u32 = 6004;

#[derive(Debug, Clone, Copy)]
pub struct LockerParams {
    pub whitelist_enabled: bool,
    pub max_stake_vote_multiplier: u8,
    pub min_stake_duration: u64,
    pub max_stake_duration: u64,
    pub proposal_activation_min_votes: u64,
}

impl LockerParams {
    fn encode(&self, data: &mut Vec<u8>) {
        data.push(self.whitelist_enabled as u8);
        data.push(self.max_stake_vote_multiplier);
        data.extend_from_slice(&self.min_stake_duration.to_le_bytes());
        data.extend_from_slice(&self.max_stake_duration.to_le_bytes());
        data.extend_from_slice(&self.proposal_activation_min_votes.to_le_bytes());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GovernanceParams {
    pub voting_delay: u64,
    pub voting_period: u64,
    pub quorum_votes: u64,
    pub timelock_delay_seconds: u64,
}

impl GovernanceParams {
    fn encode(&self, data: &mut Vec<u8>) {
        data.extend_from_slice(&self.voting_delay.to_le_bytes());
        data.extend_from_slice(&self.voting_period.to_le_bytes());
        data.extend_from_slice(&self.quorum_votes.to_le_bytes());
        data.extend_from_slice(&self.timelock_delay_seconds.to_le_bytes());
    }
}

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let hash = Sha256::digest(format!("global:{}", method).as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}

// Setup LiteSVM with locked-voter, govern and the whitelist tester
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    svm.add_program(
        LOCKED_VOTER_PROGRAM_ID,
        include_bytes!("../../../target/deploy/locked_voter.so"),
    );
    svm.add_program(
        GOVERN_PROGRAM_ID,
        include_bytes!("../../../target/deploy/govern.so"),
    );
    svm.add_program(
        WHITELIST_TESTER_PROGRAM_ID,
        include_bytes!("../../../target/deploy/whitelist_tester.so"),
    );

    let mut clock: Clock = svm.get_sysvar();
    clock.unix_timestamp = START_TIMESTAMP;
    svm.set_sysvar(&clock);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

pub fn now(svm: &LiteSVM) -> i64 {
    let clock: Clock = svm.get_sysvar();
    clock.unix_timestamp
}

// Send a single-instruction transaction
// A fresh blockhash keeps identical retries from being deduplicated
pub fn send_tx(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> Result<(), String> {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

// Fails unless the transaction was rejected with the given program error code
pub fn assert_error_code(result: Result<(), String>, code: u32) {
    let err = result.expect_err("Transaction should fail");
    assert!(
        err.contains(&format!("Custom({})", code)),
        "Expected error code {}, got: {}",
        code,
        err
    );
}

// Deserialize an Anchor account
pub fn read_account<T: AccountDeserialize>(svm: &LiteSVM, address: &Pubkey) -> T {
    let account = svm.get_account(address).expect("Account should exist");
    T::try_deserialize(&mut account.data.as_slice()).expect("Account should deserialize")
}

pub fn to_sdk(key: &anchor_lang::prelude::Pubkey) -> Pubkey {
    Pubkey::new_from_array(key.to_bytes())
}

// ======================== PDAS ========================

pub fn derive_locker_pda(base: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LOCKER, base.as_ref()], &LOCKED_VOTER_PROGRAM_ID)
}

pub fn derive_escrow_pda(locker: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ESCROW, locker.as_ref(), owner.as_ref()],
        &LOCKED_VOTER_PROGRAM_ID,
    )
}

// Owner defaults to the zero key for entries that cover every escrow
pub fn derive_whitelist_entry_pda(
    locker: &Pubkey,
    program_id: &Pubkey,
    owner: Option<&Pubkey>,
) -> (Pubkey, u8) {
    let owner = owner.copied().unwrap_or_default();
    Pubkey::find_program_address(
        &[WHITELIST_ENTRY, locker.as_ref(), program_id.as_ref(), owner.as_ref()],
        &LOCKED_VOTER_PROGRAM_ID,
    )
}

pub fn derive_governor_pda(base: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GOVERNOR, base.as_ref()], &GOVERN_PROGRAM_ID)
}

pub fn derive_proposal_pda(governor: &Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROPOSAL, governor.as_ref(), &index.to_le_bytes()],
        &GOVERN_PROGRAM_ID,
    )
}

pub fn derive_vote_pda(proposal: &Pubkey, voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VOTE, proposal.as_ref(), voter.as_ref()],
        &GOVERN_PROGRAM_ID,
    )
}

pub fn escrow_tokens_address(escrow: &Pubkey, token_mint: &Pubkey) -> Pubkey {
    get_associated_token_address(escrow, token_mint)
}

// ======================== GOVERN INSTRUCTIONS ========================

pub fn build_create_governor_ix(
    base: &Pubkey,
    payer: &Pubkey,
    electorate: &Pubkey,
    smart_wallet: &Pubkey,
    params: GovernanceParams,
) -> Instruction {
    let (governor, _) = derive_governor_pda(base);

    let mut data = anchor_discriminator("create_governor").to_vec();
    data.extend_from_slice(electorate.as_ref());
    params.encode(&mut data);

    Instruction {
        program_id: GOVERN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*base, true),
            AccountMeta::new(governor, false),
            AccountMeta::new_readonly(*smart_wallet, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_create_proposal_ix(
    governor: &Pubkey,
    index: u64,
    proposer: &Pubkey,
    payer: &Pubkey,
) -> Instruction {
    let (proposal, _) = derive_proposal_pda(governor, index);

    // Empty instruction list
    let mut data = anchor_discriminator("create_proposal").to_vec();
    data.extend_from_slice(&0u32.to_le_bytes());

    Instruction {
        program_id: GOVERN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*governor, false),
            AccountMeta::new(proposal, false),
            AccountMeta::new_readonly(*proposer, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// ======================== LOCKED VOTER INSTRUCTIONS ========================

pub fn build_new_locker_ix(
    base: &Pubkey,
    token_mint: &Pubkey,
    governor: &Pubkey,
    payer: &Pubkey,
    params: LockerParams,
) -> Instruction {
    let (locker, _) = derive_locker_pda(base);

    let mut data = anchor_discriminator("new_locker").to_vec();
    params.encode(&mut data);

    Instruction {
        program_id: LOCKED_VOTER_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*base, true),
            AccountMeta::new(locker, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new_readonly(*governor, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_new_escrow_ix(
    locker: &Pubkey,
    token_mint: &Pubkey,
    escrow_owner: &Pubkey,
    payer: &Pubkey,
) -> Instruction {
    let (escrow, _) = derive_escrow_pda(locker, escrow_owner);
    let escrow_tokens = escrow_tokens_address(&escrow, token_mint);

    Instruction {
        program_id: LOCKED_VOTER_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*locker, false),
            AccountMeta::new(escrow, false),
            AccountMeta::new(escrow_tokens, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new_readonly(*escrow_owner, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("new_escrow").to_vec(),
    }
}

// Accounts shared by a direct lock and a lock forwarded by the tester
fn lock_accounts(
    locker: &Pubkey,
    token_mint: &Pubkey,
    escrow_owner: &Pubkey,
    source_tokens: &Pubkey,
) -> Vec<AccountMeta> {
    let (escrow, _) = derive_escrow_pda(locker, escrow_owner);
    let escrow_tokens = escrow_tokens_address(&escrow, token_mint);

    vec![
        AccountMeta::new(*locker, false),
        AccountMeta::new(escrow, false),
        AccountMeta::new(escrow_tokens, false),
        AccountMeta::new_readonly(*escrow_owner, true),
        AccountMeta::new(*source_tokens, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(INSTRUCTIONS_SYSVAR_ID, false),
    ]
}

fn lock_data(method: &str, amount: u64, duration: u64) -> Vec<u8> {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(&duration.to_le_bytes());
    data
}

// Lock called directly; a missing whitelist entry is passed as the program id
pub fn build_lock_ix(
    locker: &Pubkey,
    token_mint: &Pubkey,
    escrow_owner: &Pubkey,
    source_tokens: &Pubkey,
    amount: u64,
    duration: u64,
) -> Instruction {
    let mut accounts = lock_accounts(locker, token_mint, escrow_owner, source_tokens);
    accounts.push(AccountMeta::new_readonly(LOCKED_VOTER_PROGRAM_ID, false));

    Instruction {
        program_id: LOCKED_VOTER_PROGRAM_ID,
        accounts,
        data: lock_data("lock", amount, duration),
    }
}

// Lock forwarded through the whitelist tester program
pub fn build_tester_lock_ix(
    locker: &Pubkey,
    token_mint: &Pubkey,
    escrow_owner: &Pubkey,
    source_tokens: &Pubkey,
    whitelist_entry: Option<&Pubkey>,
    amount: u64,
    duration: u64,
) -> Instruction {
    let mut accounts = lock_accounts(locker, token_mint, escrow_owner, source_tokens);
    accounts.push(AccountMeta::new_readonly(
        whitelist_entry.copied().unwrap_or(WHITELIST_TESTER_PROGRAM_ID),
        false,
    ));
    accounts.push(AccountMeta::new_readonly(LOCKED_VOTER_PROGRAM_ID, false));

    Instruction {
        program_id: WHITELIST_TESTER_PROGRAM_ID,
        accounts,
        data: lock_data("lock_tokens", amount, duration),
    }
}

pub fn build_exit_ix(
    locker: &Pubkey,
    token_mint: &Pubkey,
    escrow_owner: &Pubkey,
    destination_tokens: &Pubkey,
    payer: &Pubkey,
) -> Instruction {
    let (escrow, _) = derive_escrow_pda(locker, escrow_owner);
    let escrow_tokens = escrow_tokens_address(&escrow, token_mint);

    Instruction {
        program_id: LOCKED_VOTER_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*locker, false),
            AccountMeta::new(escrow, false),
            AccountMeta::new_readonly(*escrow_owner, true),
            AccountMeta::new(escrow_tokens, false),
            AccountMeta::new(*destination_tokens, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: anchor_discriminator("exit").to_vec(),
    }
}

pub fn build_activate_proposal_ix(
    locker: &Pubkey,
    governor: &Pubkey,
    proposal: &Pubkey,
    escrow_owner: &Pubkey,
) -> Instruction {
    let (escrow, _) = derive_escrow_pda(locker, escrow_owner);

    Instruction {
        program_id: LOCKED_VOTER_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*locker, false),
            AccountMeta::new_readonly(*governor, false),
            AccountMeta::new(*proposal, false),
            AccountMeta::new_readonly(escrow, false),
            AccountMeta::new_readonly(*escrow_owner, true),
            AccountMeta::new_readonly(GOVERN_PROGRAM_ID, false),
        ],
        data: anchor_discriminator("activate_proposal").to_vec(),
    }
}

pub fn build_cast_vote_ix(
    locker: &Pubkey,
    escrow_owner: &Pubkey,
    vote_delegate: &Pubkey,
    governor: &Pubkey,
    proposal: &Pubkey,
    side: u8,
) -> Instruction {
    let (escrow, _) = derive_escrow_pda(locker, escrow_owner);
    let (vote, _) = derive_vote_pda(proposal, escrow_owner);

    let mut data = anchor_discriminator("cast_vote").to_vec();
    data.push(side);

    Instruction {
        program_id: LOCKED_VOTER_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*locker, false),
            AccountMeta::new_readonly(escrow, false),
            AccountMeta::new(*vote_delegate, true),
            AccountMeta::new(*proposal, false),
            AccountMeta::new(vote, false),
            AccountMeta::new_readonly(*governor, false),
            AccountMeta::new_readonly(GOVERN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_set_vote_delegate_ix(
    locker: &Pubkey,
    escrow_owner: &Pubkey,
    new_delegate: &Pubkey,
) -> Instruction {
    let (escrow, _) = derive_escrow_pda(locker, escrow_owner);

    let mut data = anchor_discriminator("set_vote_delegate").to_vec();
    data.extend_from_slice(new_delegate.as_ref());

    Instruction {
        program_id: LOCKED_VOTER_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(escrow, false),
            AccountMeta::new_readonly(*escrow_owner, true),
        ],
        data,
    }
}

pub fn build_set_locker_params_ix(
    locker: &Pubkey,
    governor: &Pubkey,
    smart_wallet: &Pubkey,
    params: LockerParams,
) -> Instruction {
    let mut data = anchor_discriminator("set_locker_params").to_vec();
    params.encode(&mut data);

    Instruction {
        program_id: LOCKED_VOTER_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*locker, false),
            AccountMeta::new_readonly(*governor, false),
            AccountMeta::new_readonly(*smart_wallet, true),
        ],
        data,
    }
}

pub fn build_approve_program_lock_privilege_ix(
    locker: &Pubkey,
    governor: &Pubkey,
    smart_wallet: &Pubkey,
    executable_id: &Pubkey,
    owner: Option<&Pubkey>,
    payer: &Pubkey,
) -> Instruction {
    let (whitelist_entry, _) = derive_whitelist_entry_pda(locker, executable_id, owner);

    // Option<Pubkey>: 0 for None, 1 followed by the key for Some
    let mut data = anchor_discriminator("approve_program_lock_privilege").to_vec();
    match owner {
        Some(owner) => {
            data.push(1);
            data.extend_from_slice(owner.as_ref());
        }
        None => data.push(0),
    }

    Instruction {
        program_id: LOCKED_VOTER_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*locker, false),
            AccountMeta::new(whitelist_entry, false),
            AccountMeta::new_readonly(*governor, false),
            AccountMeta::new_readonly(*smart_wallet, true),
            AccountMeta::new_readonly(*executable_id, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_revoke_program_lock_privilege_ix(
    locker: &Pubkey,
    whitelist_entry: &Pubkey,
    governor: &Pubkey,
    smart_wallet: &Pubkey,
    payer: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: LOCKED_VOTER_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*locker, false),
            AccountMeta::new(*whitelist_entry, false),
            AccountMeta::new_readonly(*governor, false),
            AccountMeta::new_readonly(*smart_wallet, true),
            AccountMeta::new(*payer, true),
        ],
        data: anchor_discriminator("revoke_program_lock_privilege").to_vec(),
    }
}
