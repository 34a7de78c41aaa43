//! Static content tables rendered by the panels
//!
//! Everything here is fixed at compile time and never mutated. None of it is
//! derived from an external source.

/// Product name shown in the header and footer
pub const PRODUCT_NAME: &str = "LORE AGENT";

/// Ticker shown on the home panel
pub const TICKER: &str = "$LORE";

/// Mock SOL balance of the simulated wallet
pub const WALLET_BALANCE: &str = "45.32";

/// Outbound social profile link
pub const SOCIAL_URL: &str = "https://x.com/elonmusk";

/// Mock USD price per SOL used by the portfolio reply
pub const SOL_USD_PRICE: f64 = 98.5;

/// A feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "⚡",
        title: "AI-Powered Tasks",
        description: "Execute complex on-chain operations through natural language commands",
    },
    Feature {
        icon: "📝",
        title: "Smart Contract Integration",
        description: "Seamlessly interact with any Solana program or smart contract",
    },
    Feature {
        icon: "🔒",
        title: "Secure Transactions",
        description: "End-to-end encryption and multi-signature authorization",
    },
    Feature {
        icon: "📊",
        title: "Comprehensive Analytics",
        description: "Real-time insights into your Solana portfolio and market trends",
    },
];

/// Two-column highlight blurbs on the features panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "AI-Powered Intelligence",
        body: "Lore Agent uses advanced machine learning to understand your intentions and \
               execute complex Solana blockchain operations automatically.",
    },
    Highlight {
        title: "Seamless Solana Integration",
        body: "Direct interaction with Solana's ecosystem, including DeFi protocols, \
               NFT marketplaces, and custom smart contracts.",
    },
];

/// Numbered onboarding step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

pub const GET_STARTED: &[Step] = &[
    Step {
        title: "Connect Wallet",
        body: "Securely link your Solana wallet to enable agent operations",
    },
    Step {
        title: "Set Preferences",
        body: "Customize agent behavior and permission levels",
    },
    Step {
        title: "Issue Commands",
        body: "Start using natural language to control your Solana experience",
    },
];

/// One row of the portfolio overview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holding {
    pub token: &'static str,
    pub balance: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

impl Holding {
    /// Whether the 24h change is non-negative
    pub fn is_up(&self) -> bool {
        !self.change.starts_with('-')
    }
}

pub const PORTFOLIO: &[Holding] = &[
    Holding {
        token: "SOL",
        balance: WALLET_BALANCE,
        value: "$7,795.23",
        change: "+2.4%",
    },
    Holding {
        token: "USDC",
        balance: "125.00",
        value: "$125.01",
        change: "-1.2%",
    },
    Holding {
        token: "RAY",
        balance: "345.67",
        value: "$1,032",
        change: "+3.5%",
    },
    Holding {
        token: "BONK",
        balance: "1,450,000",
        value: "$43.5",
        change: "-0.8%",
    },
];

/// Dashboard metric card. `None` value means "the wallet balance".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: Option<&'static str>,
}

pub const METRICS: &[Metric] = &[
    Metric {
        icon: "🔄",
        label: "Transactions",
        value: Some("1,432"),
    },
    Metric {
        icon: "⚙",
        label: "Agent Tasks",
        value: Some("86"),
    },
    Metric {
        icon: "💰",
        label: "SOL Balance",
        value: None,
    },
    Metric {
        icon: "📶",
        label: "Network Status",
        value: Some("Optimal"),
    },
];

/// Activity timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub action: &'static str,
    pub time: &'static str,
}

pub const ACTIVITY: &[Activity] = &[
    Activity {
        action: "Token Swap Executed",
        time: "10 minutes ago",
    },
    Activity {
        action: "Smart Contract Interaction",
        time: "1 hour ago",
    },
    Activity {
        action: "NFT Purchase",
        time: "3 hours ago",
    },
    Activity {
        action: "Staking Rewards Claimed",
        time: "Yesterday",
    },
];

/// Percentage bar on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceStat {
    pub label: &'static str,
    pub percent: u16,
}

pub const PERFORMANCE: &[PerformanceStat] = &[
    PerformanceStat {
        label: "Response Time",
        percent: 92,
    },
    PerformanceStat {
        label: "Task Success Rate",
        percent: 87,
    },
    PerformanceStat {
        label: "Gas Optimization",
        percent: 95,
    },
];

pub const QUICK_ACTIONS: &[&str] = &[
    "Execute Swap",
    "Verify Contract",
    "Check Balance",
    "View Market",
];

/// Commands offered next to the agent console
pub const EXAMPLE_COMMANDS: &[&str] = &[
    "Swap 2 SOL for USDC",
    "Check my staking rewards",
    "Buy NFT from collection XYZ",
    "Deploy my smart contract",
    "Monitor transaction XYZ...",
];

/// Documentation section card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocSection {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const DOC_SECTIONS: &[DocSection] = &[
    DocSection {
        icon: "📝",
        title: "Command Reference",
        description: "Learn about all available commands and their syntax",
    },
    DocSection {
        icon: "📄",
        title: "Smart Contract Integration",
        description: "How to connect your smart contracts with Lore Agent",
    },
    DocSection {
        icon: "💼",
        title: "Wallet Management",
        description: "Secure wallet integration and transaction signing",
    },
    DocSection {
        icon: "⚙",
        title: "Agent Configuration",
        description: "Customize agent behavior and permissions",
    },
];

pub const DOCS_INTRO: &str = "Lore Agent is an AI-powered assistant for the Solana blockchain. \
It helps you interact with the Solana ecosystem using natural language commands, making \
blockchain operations accessible to everyone.";

pub const TUTORIALS: &[&str] = &[
    "Setting up your first agent task",
    "Automating token swaps with natural language",
    "Creating a custom agent for NFT monitoring",
    "Advanced: Building multi-step workflows",
];

pub const FOOTER_LINKS: &[&str] = &["Documentation", "API", "Support", "Privacy"];

/// Choices of the cosmetic transaction-limit selector, in SOL
pub const TRANSACTION_LIMITS: &[&str] = &["0.5 SOL", "1 SOL", "5 SOL", "10 SOL"];

/// The standalone profile card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub wallet_address: &'static str,
    pub balance: &'static str,
    pub permissions: &'static str,
}

pub const PROFILE: Profile = Profile {
    wallet_address: "4Qkev2QdgdkT...",
    balance: "45.32 SOL",
    permissions: "Read & Execute",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(PORTFOLIO.len(), 4);
        assert_eq!(EXAMPLE_COMMANDS.len(), 5);
        assert_eq!(DOC_SECTIONS.len(), 4);
        assert_eq!(TUTORIALS.len(), 4);
        assert_eq!(TRANSACTION_LIMITS.len(), 4);
    }

    #[test]
    fn test_holding_direction() {
        assert!(PORTFOLIO[0].is_up());
        assert!(!PORTFOLIO[1].is_up());
    }

    #[test]
    fn test_sol_holding_matches_wallet_balance() {
        assert_eq!(PORTFOLIO[0].balance, WALLET_BALANCE);
        assert!(PROFILE.balance.starts_with(WALLET_BALANCE));
    }

    #[test]
    fn test_balance_metric_is_dynamic() {
        let balance = METRICS.iter().find(|m| m.label == "SOL Balance").unwrap();
        assert!(balance.value.is_none());
    }
}
