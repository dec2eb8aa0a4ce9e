use super::*;
use pretty_assertions::assert_eq;

fn big(n: i64) -> BigInt {
    BigInt::from(n)
}

#[test]
fn test_transfer_moves_balances() {
    let store = StaticStore::default().with_balance("a", "USD", 100);
    let mut ctx = ExecutionContext::from_store(&store);

    ctx.transfer("a", "b", "USD", &big(30));
    assert_eq!(ctx.balance("a", "USD"), big(70));
    assert_eq!(ctx.balance("b", "USD"), big(30));
    assert_eq!(ctx.postings().len(), 1);

    // The snapshot is untouched.
    assert_eq!(store.balance("a", "USD"), big(100));
}

#[test]
fn test_zero_transfer_emits_nothing() {
    let mut ctx = ExecutionContext::from_store(&StaticStore::default());
    ctx.transfer("a", "b", "USD", &big(0));
    assert!(ctx.postings().is_empty());
    assert_eq!(ctx.into_result(), ExecutionResult::default());
}

#[test]
fn test_metadata_reads_own_writes() {
    let store = StaticStore::default().with_metadata("a", "tier", "silver");
    let mut ctx = ExecutionContext::from_store(&store);
    assert_eq!(ctx.metadata("a", "tier"), Some("silver"));

    ctx.set_account_metadata("a", "tier", "gold".to_string());
    ctx.set_account_metadata("a", "tier", "platinum".to_string());
    assert_eq!(ctx.metadata("a", "tier"), Some("platinum"));

    let result = ctx.into_result();
    let written: Vec<_> = result.account_metadata["a"].iter().collect();
    assert_eq!(written, vec![(&"tier".to_string(), &"platinum".to_string())]);
}

#[test]
fn test_result_only_holds_written_keys() {
    let store = StaticStore::default().with_metadata("a", "untouched", "x");
    let mut ctx = ExecutionContext::from_store(&store);
    ctx.set_tx_metadata("k".to_string(), "v".to_string());
    let result = ctx.into_result();
    assert!(result.account_metadata.is_empty());
    assert_eq!(result.tx_metadata.get("k").map(String::as_str), Some("v"));
}

#[test]
fn test_count_step() {
    let mut ctx = ExecutionContext::from_store(&StaticStore::default());
    assert_eq!(ctx.count_step(), 1);
    assert_eq!(ctx.count_step(), 2);
}
