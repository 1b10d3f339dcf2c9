mod common;

use pocket_ledger::{
    errors::{ValidationError, ValidationErrorKind},
    form::Submission,
    ledger::{Summary, TransactionKind},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use common::fixed_ledger;

#[test]
fn valid_inputs_grow_the_ledger_by_one() {
    let mut ledger = fixed_ledger();
    let cases = [
        ("income", dec!(0.01), "a"),
        ("expense", dec!(99999.99), "rent"),
        ("Income", dec!(12.345), "  coffee  "),
        ("2", dec!(1), "menu shortcut"),
    ];
    for (idx, (kind, amount, description)) in cases.into_iter().enumerate() {
        ledger
            .add_transaction(kind, amount, description)
            .unwrap_or_else(|err| panic!("case {idx} rejected: {err}"));
        assert_eq!(ledger.len(), idx + 1);
    }
}

#[test]
fn each_broken_rule_reports_its_own_kind_and_changes_nothing() {
    let mut ledger = fixed_ledger();
    ledger.add_transaction("income", dec!(10), "seed").unwrap();
    let before = ledger.entries().to_vec();

    let cases = [
        ("income", Decimal::ZERO, "ok", ValidationErrorKind::InvalidAmount),
        ("income", dec!(-1), "ok", ValidationErrorKind::InvalidAmount),
        ("expense", dec!(5), "   ", ValidationErrorKind::MissingDescription),
        ("expense", dec!(5), "", ValidationErrorKind::MissingDescription),
        ("savings", dec!(5), "ok", ValidationErrorKind::InvalidKind),
    ];
    for (kind, amount, description, expected) in cases {
        let err = ledger
            .add_transaction(kind, amount, description)
            .unwrap_err();
        assert_eq!(err.kind(), expected, "{kind} {amount} {description:?}");
        assert_eq!(ledger.entries(), before.as_slice());
    }
}

#[test]
fn empty_ledger_summary_is_zero_and_reads_are_stable() {
    let mut ledger = fixed_ledger();
    assert_eq!(ledger.summary(), Summary::ZERO);

    ledger.add_transaction("income", dec!(7.5), "gift").unwrap();
    assert_eq!(ledger.summary(), ledger.summary());
}

#[test]
fn income_then_expense_adds_up() {
    let mut ledger = fixed_ledger();
    ledger.add_transaction("income", dec!(100.00), "A").unwrap();
    ledger.add_transaction("expense", dec!(40.00), "B").unwrap();
    assert_eq!(
        ledger.summary(),
        Summary {
            total_income: dec!(100.00),
            total_expense: dec!(40.00),
            balance: dec!(60.00),
        }
    );
}

#[test]
fn entries_keep_insertion_order() {
    let mut ledger = fixed_ledger();
    let descriptions = ["first", "second", "third"];
    for description in descriptions {
        ledger.add_transaction("expense", dec!(1), description).unwrap();
    }
    for (n, description) in descriptions.iter().enumerate() {
        assert_eq!(ledger.get(n).unwrap().description(), *description);
    }
}

#[test]
fn stored_amount_is_always_the_magnitude() {
    let mut ledger = fixed_ledger();
    ledger.add_transaction("expense", dec!(40), "food").unwrap();
    let txn = ledger.get(0).unwrap();
    assert_eq!(txn.kind(), TransactionKind::Expense);
    assert_eq!(txn.amount(), dec!(40));
    assert_eq!(txn.signed_amount(), dec!(-40));
}

#[test]
fn form_scenario_salary_then_missing_description() {
    let mut ledger = fixed_ledger();

    let recorded = ledger
        .submit(&Submission::new("Salary", "2000", "income"))
        .unwrap();
    assert_eq!(recorded.summary.balance, dec!(2000.00));
    assert_eq!(recorded.transaction.description(), "Salary");

    let err = ledger
        .submit(&Submission::new("", "50", "expense"))
        .unwrap_err();
    assert_eq!(err, ValidationError::MissingDescription);
    assert_eq!(ledger.summary().balance, dec!(2000.00));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn form_coercion_failures_map_to_validation_kinds() {
    let mut ledger = fixed_ledger();

    let err = ledger
        .submit(&Submission::new("Lunch", "twelve", "expense"))
        .unwrap_err();
    assert_eq!(err, ValidationError::InvalidAmount);

    let missing_description = Submission {
        description: None,
        ..Submission::new("", "12", "expense")
    };
    assert_eq!(
        ledger.submit(&missing_description).unwrap_err(),
        ValidationError::MissingDescription
    );

    let missing_kind = Submission {
        kind: None,
        ..Submission::new("Lunch", "12", "")
    };
    assert_eq!(
        ledger.submit(&missing_kind).unwrap_err(),
        ValidationError::InvalidKind
    );

    assert!(ledger.is_empty());
}

#[test]
fn totals_that_would_overflow_reject_the_entry_and_keep_the_ledger_usable() {
    let mut ledger = fixed_ledger();
    let max = Decimal::MAX.to_string();

    ledger.submit(&Submission::new("a", max.as_str(), "income")).unwrap();
    let err = ledger
        .submit(&Submission::new("a", max.as_str(), "income"))
        .unwrap_err();

    assert_eq!(err, ValidationError::InvalidAmount);
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.summary().total_income, Decimal::MAX);
    assert_eq!(ledger.report().movements, 1);

    ledger.add_transaction("expense", dec!(1), "still works").unwrap();
    assert_eq!(ledger.summary().balance, Decimal::MAX - dec!(1));
}

#[test]
fn amounts_that_lose_typed_digits_are_invalid() {
    let mut ledger = fixed_ledger();
    for raw in ["1_000", "0.00000000000000000000000000000001"] {
        assert_eq!(
            ledger.submit(&Submission::new("x", raw, "income")).unwrap_err(),
            ValidationError::InvalidAmount,
            "input {raw:?}"
        );
    }
    assert!(ledger.is_empty());
}
