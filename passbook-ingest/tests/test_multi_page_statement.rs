use passbook_core::{Category, TransactionType};
use passbook_ingest::{parse_statement_text, process_text};
use rust_decimal::Decimal;
use std::str::FromStr;

const STATEMENT: &str = "\
STATE BANK OF SOMEWHERE
Account Statement for A/C 000123456789
Txn Date  Value Date  Description  Debit  Credit  Balance
01/06/2024 01/06/2024 THIS ROW IS ABOVE THE MARKER 999.00  1.00CR
balance b/f                                          50,000.00CR
02/06/2024 02/06/2024 UPI/DR/4155/SWIGGY FOOD 450.00  49,550.00CR
UPI/okaxis/Payment
from PhonePe
03/06/2024 03/06/2024 BY TRANSFER-NEFT*ACME LTD SALARY  85,000.00 1,34,550.00CR
JUNE 2024
Page No: 1
                                              Page No: 1 of 2
04/06/2024 broken row without columns
05/06/2024 05/06/2024 ATM WDL 0.00  0.00 1,34,550.00CR
CASH REVERSED REF 7781
06/06/2024 06/06/2024 Electricity Bill BESCOM 2,310.40  1,32,239.60CR
Consumer No 9988
07/06/2024 07/06/2024 CREDIT RFND AMAZON  1,299.00 1,33,538.60CR
";

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_multi_page_statement() {
    let txns = parse_statement_text(STATEMENT, "owner-99").unwrap();
    assert_eq!(txns.len(), 4, "{txns:#?}");

    assert_eq!(
        txns[0].description,
        "UPI/DR/4155/SWIGGY FOOD UPI/okaxis/Payment from PhonePe"
    );
    assert_eq!(txns[0].kind, TransactionType::Expense);
    assert_eq!(txns[0].amount, dec("450.00"));
    assert_eq!(txns[0].category, Category::FoodAndDining);

    assert_eq!(
        txns[1].description,
        "BY TRANSFER-NEFT*ACME LTD SALARY JUNE 2024 CASH REVERSED REF 7781"
    );
    assert_eq!(txns[1].kind, TransactionType::Income);
    assert_eq!(txns[1].amount, dec("85000.00"));
    assert_eq!(txns[1].category, Category::Salary);

    assert_eq!(txns[2].description, "Electricity Bill BESCOM Consumer No 9988");
    assert_eq!(txns[2].amount, dec("2310.40"));
    assert_eq!(txns[2].category, Category::BillsAndUtilities);

    assert_eq!(txns[3].kind, TransactionType::Income);
    assert_eq!(txns[3].category, Category::Investment);
    assert_eq!(txns[3].date.to_string(), "2024-06-07");
}

#[test]
fn test_lines_before_marker_never_contribute() {
    let txns = parse_statement_text(STATEMENT, "owner-99").unwrap();
    assert!(txns.iter().all(|t| !t.description.contains("ABOVE THE MARKER")));
    assert!(txns.iter().all(|t| !t.description.contains("Page No")));
    assert!(txns.iter().all(|t| !t.description.contains("broken row")));
}

#[test]
fn test_rejected_anchor_lines_extend_previous_transaction() {
    let txns = parse_statement_text(STATEMENT, "owner-99").unwrap();
    let with_reversal: Vec<_> = txns
        .iter()
        .filter(|t| t.description.contains("CASH REVERSED"))
        .collect();
    assert_eq!(with_reversal.len(), 1);
    assert_eq!(with_reversal[0].amount, dec("85000.00"));
    assert_eq!(with_reversal[0].category, Category::Salary);
}

#[test]
fn test_order_and_envelope() {
    let outcome = process_text(STATEMENT, "owner-99");
    assert!(outcome.success);
    assert_eq!(outcome.count, outcome.transactions.len());

    let dates: Vec<String> = outcome
        .transactions
        .iter()
        .map(|t| t.date.to_string())
        .collect();
    assert_eq!(
        dates,
        vec!["2024-06-02", "2024-06-03", "2024-06-06", "2024-06-07"]
    );
    assert!(outcome.transactions.iter().all(|t| t.owner_id == "owner-99"));
}
