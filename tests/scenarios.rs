//! End-to-end scenarios against the public façade: the canonical worked examples of
//! simplification, truth-table compilation and advanced-form recognition.

use boolsimp::config::Limits;
use boolsimp::lexer::tokenize;
use boolsimp::parser::parse;
use boolsimp::pattern::to_advanced;
use boolsimp::printer::print;
use boolsimp::truth_table::{compile, truth_table};
use boolsimp::{optimize, Options};

fn optimized(source: &str) -> String {
    optimize(source, Options::default()).unwrap().optimized
}

#[test]
fn s1_factorisation_direct() {
    assert_eq!(optimized("a & b | a & c"), "a & (b | c)");
}

#[test]
fn s2_factorisation_reverse() {
    assert_eq!(optimized("(a | b) & (a | c)"), "a | (b & c)");
}

#[test]
fn s3_de_morgan_over_and() {
    assert_eq!(optimized("!(a & b)"), "!a | !b");
}

#[test]
fn s4_double_negation() {
    assert_eq!(optimized("!!a"), "a");
}

#[test]
fn s5_tautology_from_complement_in_or() {
    assert_eq!(optimized("a | b | !a | c"), "1");
}

#[test]
fn s6_contradiction_from_complement_in_and() {
    assert_eq!(optimized("a & b & !a & c"), "0");
}

#[test]
fn s7_extended_absorption_in_or() {
    assert_eq!(optimized("a | !a & b"), "a | b");
}

#[test]
fn and_truth_table_over_two_variables() {
    let tokens = tokenize("a & b", &Limits::default()).unwrap();
    let ast = parse(&tokens).unwrap();
    let vars = vec!["a".to_string(), "b".to_string()];
    let table = truth_table(&compile(&ast), &vars);
    assert_eq!(table, vec![false, false, false, true]);
}

#[test]
fn xor_shape_truth_table_over_two_variables() {
    let tokens = tokenize("(a & !b) | (!a & b)", &Limits::default()).unwrap();
    let ast = parse(&tokens).unwrap();
    let vars = vec!["a".to_string(), "b".to_string()];
    let table = truth_table(&compile(&ast), &vars);
    assert_eq!(table, vec![false, true, true, false]);
}

#[test]
fn xor_shape_is_recognised_and_printed_with_its_glyph() {
    let tokens = tokenize("(a & !b) | (!a & b)", &Limits::default()).unwrap();
    let ast = parse(&tokens).unwrap();
    assert_eq!(print(&to_advanced(&ast)), "a XOR b");
}

#[test]
fn implication_shape_is_recognised_and_printed_with_its_glyph() {
    let tokens = tokenize("!a | b", &Limits::default()).unwrap();
    let ast = parse(&tokens).unwrap();
    assert_eq!(print(&to_advanced(&ast)), "a \u{2192} b");
}

#[test]
fn empty_expression_is_a_typed_error_not_a_panic() {
    assert!(optimize("", Options::default()).is_err());
}

#[test]
fn unknown_character_is_a_typed_error_not_a_panic() {
    assert!(optimize("a @ b", Options::default()).is_err());
}
