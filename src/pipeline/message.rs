//! Alert message templates (Telegram Markdown)

use crate::models::{TokenMetadata, TransactionDetail, LAMPORTS_PER_SOL};
use chrono::DateTime;

const UNKNOWN: &str = "?";
const NOT_AVAILABLE: &str = "N/A";

/// Fields shared by both alert templates.
#[derive(Debug, Clone)]
pub struct AlertFields<'a> {
    pub signature: &'a str,
    pub from: &'a str,
    pub to: &'a str,
    pub amount_sol: f64,
    pub sol_price: Option<f64>,
    pub detail: Option<&'a TransactionDetail>,
}

/// Token section of the rich template.
#[derive(Debug, Clone)]
pub struct TokenFields<'a> {
    pub mint: &'a str,
    pub metadata: &'a TokenMetadata,
}

/// Reduced alert: wallets, amount, USD value and the transaction link.
pub fn format_reduced(fields: &AlertFields<'_>) -> String {
    let mut msg = header(fields);
    push_footer(&mut msg, fields);
    msg
}

/// Rich alert: the reduced alert plus token symbol, name, mint, price and liquidity.
pub fn format_rich(fields: &AlertFields<'_>, token: &TokenFields<'_>) -> String {
    let meta = token.metadata;
    let mut msg = header(fields);
    msg.push_str(&format!(
        "🪙 *Token:* {} ({})\n",
        escape_markdown(meta.symbol.as_deref().unwrap_or(NOT_AVAILABLE)),
        escape_markdown(meta.name.as_deref().unwrap_or(NOT_AVAILABLE)),
    ));
    msg.push_str(&format!("📍 *Mint:* {}\n", code_span(token.mint)));
    msg.push_str(&format!("💵 *Price:* {}\n", format_usd(meta.price_usd, 4)));
    msg.push_str(&format!("💧 *Liquidity:* {}\n", format_usd(meta.liquidity_usd, 0)));
    push_footer(&mut msg, fields);
    msg
}

fn header(fields: &AlertFields<'_>) -> String {
    let usd_value = fields.sol_price.map(|price| price * fields.amount_sol);
    format!(
        "🚨 *Wallet Activity Detected*\n\n\
         👤 *From:* {}\n\
         ➡️ *To:* {}\n\
         💰 *Amount:* {} SOL ({})\n",
        code_span(fields.from),
        code_span(fields.to),
        format_sol(fields.amount_sol),
        format_usd(usd_value, 2),
    )
}

fn push_footer(msg: &mut String, fields: &AlertFields<'_>) {
    if let Some(detail) = fields.detail {
        if let Some(time) = detail
            .block_time
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
        {
            msg.push_str(&format!("🕒 *Time:* {}\n", time.format("%Y-%m-%d %H:%M:%S UTC")));
        }
        if let Some(fee) = detail.fee_lamports {
            msg.push_str(&format!("⛽ *Fee:* {:.6} SOL\n", fee as f64 / LAMPORTS_PER_SOL));
        }
        if let Some(status) = detail.status.as_deref() {
            msg.push_str(&format!("📋 *Status:* {}\n", escape_markdown(status)));
        }
    }
    msg.push_str(&format!(
        "🔗 [View on Solscan](https://solscan.io/tx/{})",
        fields.signature
    ));
}

/// Escape legacy-Markdown entity characters in text placed outside any entity.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '_' | '*' | '[' | '`') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Wrap `text` in a code span. Backticks cannot be escaped inside one, so they are replaced.
pub fn code_span(text: &str) -> String {
    format!("`{}`", text.replace('`', "'"))
}

pub fn format_sol(amount: f64) -> String {
    format!("{:.4}", amount)
}

/// `$` amount with thousands separators, or `?` when unknown.
pub fn format_usd(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${}", with_thousands(v, decimals)),
        _ => UNKNOWN.to_string(),
    }
}

pub fn with_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

