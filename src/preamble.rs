//! The instruction block placed above every processed news dump.

/// Separator between the preamble and the news body.
pub const SEPARATOR: &str = "\n\n";

/// Instruction text prepended to the news items.
///
/// Starts and ends with a newline; copied into the output unchanged.
pub const PREAMBLE: &str = "
You will receive a stream of news items related to publicly traded companies.\x20
1. **Scan comprehensively**—do not miss any headline.
2. **Identify and prioritize** only those items with clear positive OR negative impact potential on share price; discard irrelevant fluff.
3. **Focus specifically** on these event types (but stay alert for other impactful news):
   - Mergers & Acquisitions (acquisition talks, takeover bids, joint-ventures)
   - Major Deals & Partnerships (contracts, supply agreements, strategic alliances)
   - Legal & Regulatory Actions (court rulings, lawsuits, fines, government investigations)
   - Capital Moves (fundraising rounds, debt issuances, equity offerings, share buybacks, dividends)
   - Project Launches & Infrastructure (new plant builds, R&D programs, technology roll-outs, site openings)
   - Management & Governance (CEO/CFO changes, board reshuffles, executive departures)
   - Product Milestones (FDA approvals, patent grants, major product launches)
   - Analyst Ratings & Brokerage Actions (upgrades, downgrades, new coverage, price-target revisions)
   - Earnings & Guidance (quarterly results, forward-looking guidance changes)
   - Insider & Shareholder Moves (insider buys/sells, block trades, activist stakes)
   - Sector & Macro Indicators (key economic data, industry outlook reports)
4. **For each impactful item**, indicate:
   - **Type** (e.g., “M&A,” “Rating Upgrade,” “Lawsuit,” “Funding”)
   - **Sentiment** (positive or negative)
   - **Rationale** (why it will likely drive the stock)
   - **Severity** (e.g., “high,” “moderate,” “low” impact)
5. **Ignore** any news that doesn’t clearly fit a market-moving category.

Return a ranked list: highest-impact positive stories first, highest-impact negative stories last.
";

/// Join `preamble` and the trimmed `body`.
///
/// Returns `None` when the body is empty after trimming.
pub fn compose(preamble: &str, body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(preamble.len() + SEPARATOR.len() + body.len());
    out.push_str(preamble);
    out.push_str(SEPARATOR);
    out.push_str(body);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compose_trims_body() {
        let out = compose("HEAD", "  \n Stock X up 5% on earnings beat.\n\n").unwrap();
        assert_eq!(out, "HEAD\n\nStock X up 5% on earnings beat.");
    }

    #[test]
    fn test_compose_keeps_inner_whitespace() {
        let out = compose("HEAD", "line 1\n\n  line 2").unwrap();
        assert_eq!(out, "HEAD\n\nline 1\n\n  line 2");
    }

    #[test]
    fn test_compose_rejects_blank_body() {
        assert!(compose(PREAMBLE, "").is_none());
        assert!(compose(PREAMBLE, " \t\r\n ").is_none());
    }

    #[test]
    fn test_preamble_shape() {
        assert!(PREAMBLE.starts_with("\nYou will receive a stream of news items"));
        assert!(PREAMBLE.ends_with("negative stories last.\n"));
        assert!(PREAMBLE.contains("companies. \n1. **Scan comprehensively**"));
    }
}
