//! Keyed XOR stream used to obfuscate selected packet regions.
//!
//! Each connection carries three independent [`CipherLink`]s (receive, send and
//! sync heartbeat). A link is seeded once from a 16-bit session key during the
//! handshake and then advances one step per transformed byte. Encoding and
//! decoding are the same operation, so both ends stay in lockstep only if they
//! transform exactly the same byte sequences in the same order.
//!
//! This is an obfuscation layer reproduced for wire compatibility. It offers no
//! confidentiality: the matrix is public, seeding is predictable and the
//! transform is a self-inverse XOR.

use crate::matrix::{MATRIX_SIZE, SHIELD_MATRIX};

/// Size of the keystream table. Only the first `KEY_SIZE - 1` entries are used.
pub const KEY_SIZE: usize = 0x100;

/// Initial value of the first rolling position.
pub const POS_1_START: u8 = 0x3a;
/// Initial value of the second rolling position.
pub const POS_2_START: u8 = 0xa5;
/// Initial value of the first seeding accumulator.
pub const RAND_1_START: u8 = 0x6b;
/// Initial value of the second seeding accumulator.
pub const RAND_2_START: u8 = 0x1d;
/// Constant mixed into every session key before seeding the generator.
pub const SRAND_CONST: u32 = 0x5f3d_91a7;

const KEY_SPAN: usize = KEY_SIZE - 1;
const MATRIX_SPAN: u32 = (MATRIX_SIZE - 1) as u32;

/// Which of the three per-connection links a keystream belongs to.
///
/// The kinds use different seeding formulas, so the same key yields three
/// unrelated keystreams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Recv,
    Send,
    Sync,
}

/// Linear-congruential generator driving the seeding procedure.
///
/// Uses the classic `214013 / 2531011` constants and yields 15-bit values.
#[derive(Debug, Clone)]
pub struct SeedRng {
    state: u32,
}

impl SeedRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_value(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(214_013).wrapping_add(2_531_011);
        (self.state >> 16) & 0x7fff
    }

    fn matrix_byte(&mut self) -> u8 {
        SHIELD_MATRIX[(self.next_value() % MATRIX_SPAN) as usize]
    }
}

/// One direction of obfuscation state.
#[derive(Clone, PartialEq, Eq)]
pub struct CipherLink {
    key: [u8; KEY_SIZE],
    pos_1: u8,
    pos_2: u8,
    pos_3: u8,
}

impl std::fmt::Debug for CipherLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherLink")
            .field("pos_1", &self.pos_1)
            .field("pos_2", &self.pos_2)
            .field("pos_3", &self.pos_3)
            .finish_non_exhaustive()
    }
}

impl Default for CipherLink {
    fn default() -> Self {
        Self {
            key: [0; KEY_SIZE],
            pos_1: POS_1_START,
            pos_2: POS_2_START,
            pos_3: 0,
        }
    }
}

/// Generator seed for a link: the receive key is XORed with [`SRAND_CONST`],
/// the send and sync keys are ORed with it.
pub fn seed_for(kind: LinkKind, session_key: u16) -> u32 {
    let key = u32::from(session_key);
    match kind {
        LinkKind::Recv => key ^ SRAND_CONST,
        LinkKind::Send | LinkKind::Sync => key | SRAND_CONST,
    }
}

impl CipherLink {
    /// Builds the keystream for `kind` from a session key.
    pub fn seeded(kind: LinkKind, session_key: u16) -> Self {
        let mut rng = SeedRng::new(seed_for(kind, session_key));

        let mut link = Self::default();
        let mut random_1 = RAND_1_START;
        let mut random_2 = RAND_2_START;

        for slot in link.key.iter_mut().take(KEY_SPAN) {
            random_1 ^= rng.matrix_byte();
            match kind {
                LinkKind::Recv => {
                    random_1 = random_1.wrapping_add(random_2.wrapping_mul(8).wrapping_add(5));
                    random_2 ^= rng.matrix_byte();
                    random_2 = random_2.wrapping_add(random_1.wrapping_mul(6).wrapping_sub(2));
                }
                LinkKind::Send => {
                    random_1 = random_1.wrapping_add(random_2.wrapping_mul(7).wrapping_sub(2));
                    random_2 ^= rng.matrix_byte();
                    random_2 = random_2.wrapping_sub(random_1.wrapping_mul(2).wrapping_add(9));
                }
                LinkKind::Sync => {
                    random_1 = random_1.wrapping_sub(random_2.wrapping_mul(4).wrapping_sub(9));
                    random_2 ^= rng.matrix_byte();
                    random_2 = random_2.wrapping_add(random_1.wrapping_mul(3).wrapping_sub(5));
                }
            }
            random_1 = random_1.wrapping_add(random_2 ^ rng.matrix_byte());
            *slot = random_1;
        }

        link
    }

    /// Transforms `data` in place and advances the link by `data.len()` steps.
    ///
    /// The second position is shifted by the region length on every step, so a
    /// region must be transformed in one call on both ends.
    pub fn apply(&mut self, data: &mut [u8]) {
        let shrink = (data.len() % 0xff) as u8;

        for byte in data.iter_mut() {
            self.pos_1 = self
                .pos_1
                .wrapping_add(self.key[usize::from(self.pos_3) % KEY_SPAN]);
            self.pos_2 = self
                .pos_2
                .wrapping_add(61u8.wrapping_sub(self.pos_1).wrapping_mul(7));
            self.key[usize::from(self.pos_2) % KEY_SPAN] ^= self.pos_1;
            self.pos_1 = self
                .pos_1
                .wrapping_add(((u32::from(self.pos_2) + u32::from(self.pos_3)) / 4) as u8);
            self.key[usize::from(self.pos_3) % KEY_SPAN] ^= self.pos_1;

            *byte ^= self.pos_1;

            self.pos_1 = self.pos_1.wrapping_sub(25);
            self.pos_2 = self.pos_2.wrapping_sub(shrink);
            self.pos_3 = self.pos_3.wrapping_add(1);
        }
    }

    pub fn positions(&self) -> (u8, u8, u8) {
        (self.pos_1, self.pos_2, self.pos_3)
    }

    pub fn keystream(&self) -> &[u8] {
        &self.key[..KEY_SPAN]
    }
}

/// The three links owned by one connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CryptLinks {
    pub recv: CipherLink,
    pub send: CipherLink,
    pub sync: CipherLink,
}

impl CryptLinks {
    pub fn seeded(recv_key: u16, send_key: u16, sync_key: u16) -> Self {
        Self {
            recv: CipherLink::seeded(LinkKind::Recv, recv_key),
            send: CipherLink::seeded(LinkKind::Send, send_key),
            sync: CipherLink::seeded(LinkKind::Sync, sync_key),
        }
    }

    pub fn get_mut(&mut self, kind: LinkKind) -> &mut CipherLink {
        match kind {
            LinkKind::Recv => &mut self.recv,
            LinkKind::Send => &mut self.send,
            LinkKind::Sync => &mut self.sync,
        }
    }
}
