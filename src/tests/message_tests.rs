//! tests/message_tests.rs - Alert templates and number formatting

#[cfg(test)]
mod tests {
    use crate::{
        models::{TokenMetadata, TransactionDetail},
        pipeline::message::{
            code_span, escape_markdown, format_reduced, format_rich, format_sol, format_usd,
            with_thousands, AlertFields, TokenFields,
        },
    };

    fn fields<'a>(sol_price: Option<f64>) -> AlertFields<'a> {
        AlertFields {
            signature: "sig123",
            from: "alice",
            to: "bob",
            amount_sol: 1234.5,
            sol_price,
            detail: None,
        }
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(with_thousands(0.0, 2), "0.00");
        assert_eq!(with_thousands(999.999, 2), "1,000.00");
        assert_eq!(with_thousands(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(with_thousands(-4321.0, 0), "-4,321");
        assert_eq!(with_thousands(12.0, 0), "12");
    }

    #[test]
    fn test_number_formats() {
        assert_eq!(format_sol(0.02), "0.0200");
        assert_eq!(format_usd(Some(3.0000000000000004), 2), "$3.00");
        assert_eq!(format_usd(Some(0.00123456), 4), "$0.0012");
        assert_eq!(format_usd(None, 2), "?");
        assert_eq!(format_usd(Some(f64::NAN), 2), "?");
    }

    #[test]
    fn test_reduced_template() {
        let text = format_reduced(&fields(Some(100.0)));

        assert_eq!(
            text,
            "🚨 *Wallet Activity Detected*\n\n\
             👤 *From:* `alice`\n\
             ➡️ *To:* `bob`\n\
             💰 *Amount:* 1234.5000 SOL ($123,450.00)\n\
             🔗 [View on Solscan](https://solscan.io/tx/sig123)"
        );
    }

    #[test]
    fn test_rich_template_fallbacks() {
        let metadata = TokenMetadata {
            name: None,
            symbol: Some("WIF".to_string()),
            price_usd: None,
            liquidity_usd: Some(9_876_543.21),
        };
        let token = TokenFields { mint: "mint111", metadata: &metadata };

        let text = format_rich(&fields(None), &token);

        assert!(text.contains("1234.5000 SOL (?)"));
        assert!(text.contains("🪙 *Token:* WIF (N/A)"));
        assert!(text.contains("📍 *Mint:* `mint111`"));
        assert!(text.contains("💵 *Price:* ?"));
        assert!(text.contains("💧 *Liquidity:* $9,876,543"));
        assert!(text.ends_with("https://solscan.io/tx/sig123)"));
    }

    #[test]
    fn test_detail_lines() {
        let detail = TransactionDetail {
            block_time: Some(0),
            fee_lamports: Some(10_000),
            status: Some("Fail_Timeout".to_string()),
        };
        let mut alert = fields(None);
        alert.detail = Some(&detail);

        let text = format_reduced(&alert);

        assert!(text.contains("🕒 *Time:* 1970-01-01 00:00:00 UTC"));
        assert!(text.contains("⛽ *Fee:* 0.000010 SOL"));
        assert!(text.contains("📋 *Status:* Fail\\_Timeout"));
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("plain"), "plain");
        assert_eq!(escape_markdown("my_wallet"), "my\\_wallet");
        assert_eq!(escape_markdown("a*b[c]`d"), "a\\*b\\[c]\\`d");
    }

    #[test]
    fn test_code_span_replaces_backticks() {
        assert_eq!(code_span("addr"), "`addr`");
        assert_eq!(code_span("we`ird"), "`we'ird`");
    }

    #[test]
    fn test_rich_template_escapes_upstream_text() {
        let metadata = TokenMetadata {
            name: Some("[Scam] token".to_string()),
            symbol: Some("PEPE_2".to_string()),
            price_usd: Some(1.0),
            liquidity_usd: Some(1.0),
        };
        let token = TokenFields { mint: "mint111", metadata: &metadata };

        let text = format_rich(&fields(None), &token);

        assert!(text.contains("🪙 *Token:* PEPE\\_2 (\\[Scam] token)"));
    }
}
