//! Synthetic agent replies
//!
//! A reply is picked by a case-insensitive keyword scan over the submitted
//! text; the first matching category wins. The numbers in the templates are
//! cosmetic fillers drawn from the caller's random source, so a seeded source
//! gives reproducible transcripts.

use lore_core::catalog;
use rand::Rng;

/// Reply template family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCategory {
    Swap,
    Stake,
    Nft,
    Contract,
    Monitor,
    Portfolio,
    Fallback,
}

/// Keyword table, scanned in order
const KEYWORDS: &[(ReplyCategory, &[&str])] = &[
    (ReplyCategory::Swap, &["swap"]),
    (ReplyCategory::Stake, &["stake", "staking"]),
    (ReplyCategory::Nft, &["nft", "buy"]),
    (ReplyCategory::Contract, &["contract", "deploy"]),
    (ReplyCategory::Monitor, &["monitor", "transaction"]),
    (ReplyCategory::Portfolio, &["balance", "portfolio"]),
];

pub const FALLBACK_REPLIES: &[&str] = &[
    "Command received. Processing blockchain operation. Please confirm authorization via connected wallet.",
    "Analyzing request pattern. Optimizing execution path for lower gas fees. Ready for execution.",
    "Decoding instruction. Cross-referencing with Solana program registry. Compatible interfaces detected.",
    "Query parameters validated. Preparing on-chain interaction. Awaiting transaction signature.",
    "Instruction buffered. Simulating transaction outcome. Expected confirmation time: 2-4 seconds.",
    "Command parsed successfully. Connecting to Solana RPC endpoints. Network status: Optimal.",
];

const TX_ID_PREFIX: &str = "SOL";
const TX_ID_LEN: usize = 8;
const TX_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A synthesized reply
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub category: ReplyCategory,
    pub text: String,
}

/// Pick the template family for `input`
pub fn classify(input: &str) -> ReplyCategory {
    let lowered = input.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lowered.contains(w)))
        .map(|(category, _)| *category)
        .unwrap_or(ReplyCategory::Fallback)
}

/// Build the agent reply for `input`.
///
/// `balance` is the displayed SOL balance, quoted back by the portfolio reply.
pub fn synthesize<R: Rng>(input: &str, balance: &str, rng: &mut R) -> Reply {
    let category = classify(input);

    let text = match category {
        ReplyCategory::Swap => format!(
            "Processing swap request. Checking market rates and liquidity pools. \
             Current slippage tolerance set to 0.5%. Transaction ID: {}",
            transaction_id(rng)
        ),
        ReplyCategory::Stake => "Analyzing staking options. Current APY ranges from 5.8% to 7.2% \
             across validated pools. Would you like me to recommend specific validators based on \
             performance history?"
            .to_string(),
        ReplyCategory::Nft => format!(
            "Searching NFT markets. Found {} items matching your criteria. Lowest price: {:.2} SOL. \
             Shall I display options by price or rarity?",
            rng.gen_range(3..15),
            rng.gen_range(0.5..2.5)
        ),
        ReplyCategory::Contract => format!(
            "Smart contract analysis complete. Code validated with {} optimization suggestions. \
             Estimated deployment cost: {:.4} SOL. Proceed with deployment?",
            rng.gen_range(1..4),
            rng.gen_range(0.0..0.1)
        ),
        ReplyCategory::Monitor => format!(
            "Transaction monitoring activated. Status: Confirmed ({} confirmations). \
             Block height: {}. Finalized on Solana mainnet.",
            rng.gen_range(20..320),
            rng.gen_range(149_000_000u64..299_000_000)
        ),
        ReplyCategory::Portfolio => {
            let sol = balance.trim().parse::<f64>().unwrap_or(0.0);
            format!(
                "Portfolio value: {:.2} USD. SOL: {} (${:.2}), USDC: 125.00 ($125.00). 24h change: {:.2}%",
                rng.gen_range(1000.0..11000.0),
                balance,
                sol * catalog::SOL_USD_PRICE,
                rng.gen_range(-4.0..4.0)
            )
        }
        ReplyCategory::Fallback => {
            FALLBACK_REPLIES[rng.gen_range(0..FALLBACK_REPLIES.len())].to_string()
        }
    };

    Reply { category, text }
}

/// Pseudo transaction id: `SOL` followed by 8 uppercase base-36 characters
pub fn transaction_id<R: Rng>(rng: &mut R) -> String {
    let mut id = String::with_capacity(TX_ID_PREFIX.len() + TX_ID_LEN);
    id.push_str(TX_ID_PREFIX);
    for _ in 0..TX_ID_LEN {
        let idx = rng.gen_range(0..TX_ID_ALPHABET.len());
        id.push(TX_ID_ALPHABET[idx] as char);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_classify_keyword_order() {
        assert_eq!(classify("Swap 2 SOL for USDC"), ReplyCategory::Swap);
        assert_eq!(classify("Check my staking rewards"), ReplyCategory::Stake);
        assert_eq!(classify("Buy NFT from collection XYZ"), ReplyCategory::Nft);
        assert_eq!(classify("Deploy my smart contract"), ReplyCategory::Contract);
        assert_eq!(classify("Monitor transaction XYZ..."), ReplyCategory::Monitor);
        assert_eq!(classify("show my PORTFOLIO"), ReplyCategory::Portfolio);
        assert_eq!(classify("hello there"), ReplyCategory::Fallback);
    }

    #[test]
    fn test_first_matching_category_wins() {
        // "swap" beats "stake" even when it appears later
        assert_eq!(classify("stake then swap"), ReplyCategory::Swap);
        // "buy" (nft) beats "transaction" (monitor)
        assert_eq!(classify("buy via transaction"), ReplyCategory::Nft);
        // "deploy" beats "balance"
        assert_eq!(classify("deploy with balance"), ReplyCategory::Contract);
    }

    #[test]
    fn test_swap_reply_carries_transaction_id() {
        let reply = synthesize("SWAP everything", "45.32", &mut rng());
        assert_eq!(reply.category, ReplyCategory::Swap);

        let re = Regex::new(r"Transaction ID: SOL[0-9A-Z]{8}$").unwrap();
        assert!(re.is_match(&reply.text), "unexpected text: {}", reply.text);
    }

    #[test]
    fn test_transaction_id_shape() {
        let re = Regex::new(r"^SOL[0-9A-Z]{8}$").unwrap();
        let mut rng = rng();
        for _ in 0..50 {
            assert!(re.is_match(&transaction_id(&mut rng)));
        }
    }

    #[test]
    fn test_nft_reply_fillers_in_range() {
        let re = Regex::new(r"Found (\d+) items .* Lowest price: (\d+\.\d{2}) SOL").unwrap();
        let mut rng = rng();
        for _ in 0..50 {
            let reply = synthesize("buy", "45.32", &mut rng);
            let caps = re.captures(&reply.text).unwrap();
            let count: u32 = caps[1].parse().unwrap();
            let price: f64 = caps[2].parse().unwrap();
            assert!((3..=14).contains(&count));
            assert!((0.5..=2.5).contains(&price));
        }
    }

    #[test]
    fn test_monitor_reply_fillers_in_range() {
        let re = Regex::new(r"\((\d+) confirmations\)\. Block height: (\d+)\.").unwrap();
        let mut rng = rng();
        for _ in 0..50 {
            let reply = synthesize("monitor", "45.32", &mut rng);
            let caps = re.captures(&reply.text).unwrap();
            let confirmations: u32 = caps[1].parse().unwrap();
            let height: u64 = caps[2].parse().unwrap();
            assert!((20..=319).contains(&confirmations));
            assert!((149_000_000..299_000_000).contains(&height));
        }
    }

    #[test]
    fn test_portfolio_reply_quotes_balance() {
        let reply = synthesize("what's my balance?", "45.32", &mut rng());
        assert_eq!(reply.category, ReplyCategory::Portfolio);
        assert!(reply.text.contains("SOL: 45.32 ($4464.02)"));
        assert!(reply.text.contains("USDC: 125.00 ($125.00)"));
    }

    #[test]
    fn test_stake_reply_is_fixed() {
        let a = synthesize("stake", "1", &mut StdRng::seed_from_u64(1));
        let b = synthesize("staking", "1", &mut StdRng::seed_from_u64(2));
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_fallback_reply_comes_from_pool() {
        let mut rng = rng();
        for _ in 0..20 {
            let reply = synthesize("gm", "45.32", &mut rng);
            assert_eq!(reply.category, ReplyCategory::Fallback);
            assert!(FALLBACK_REPLIES.contains(&reply.text.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_reply() {
        let a = synthesize("Swap 2 SOL for USDC", "45.32", &mut StdRng::seed_from_u64(42));
        let b = synthesize("Swap 2 SOL for USDC", "45.32", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
