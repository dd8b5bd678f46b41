// SPDX-FileCopyrightText: 2026 mdlest contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use mdlest::encoders::approaches::multinomial::AbsentValuePolicy;
use mdlest::encoders::mdl::Mdl;
use mdlest::encoders::traits::EncodeQuery;
use ndarray::{Array1, array};

#[test]
fn empty_query_costs_nothing() {
    let est = Mdl::multinomial(array![1.0, 2.0]).unwrap();
    assert_eq!(est.encode(&Array1::zeros(0)), 0.0);
}

#[test]
fn present_values_cost_their_self_information() {
    let est = Mdl::multinomial(array![1.0, 1.0, 2.0, 2.0, 2.0]).unwrap();
    let cost = est.encode(&array![1.0, 2.0]);
    assert_abs_diff_eq!(cost, -(0.4f64.ln()) - 0.6f64.ln(), epsilon = 1e-12);
}

#[test]
fn absent_values_fall_back_to_uniform_range_code() {
    let est = Mdl::multinomial(array![1.0, 2.0]).unwrap();
    // Flat code over [-5, 5]: ln(2 * max|q|) = ln 10 per value
    let cost = est.encode(&array![5.0]);
    assert_abs_diff_eq!(cost, 10.0f64.ln(), epsilon = 1e-12);

    // Multiplicity scales the per-value cost
    let cost = est.encode(&array![5.0, 5.0, 5.0]);
    assert_abs_diff_eq!(cost, 3.0 * 10.0f64.ln(), epsilon = 1e-12);
}

#[test]
fn empty_model_prices_every_query_value_uniformly() {
    let est = Mdl::multinomial(Vec::<f64>::new()).unwrap();
    let cost = est.encode(&array![2.0, 4.0]);
    assert_abs_diff_eq!(cost, 2.0 * 8.0f64.ln(), epsilon = 1e-12);
}

#[test]
fn all_zero_query_costs_nothing_under_uniform_fallback() {
    // A zero-width range carries a single certain symbol.
    let est = Mdl::multinomial(array![1.0, 2.0]).unwrap();
    let cost = est.encode(&array![0.0, 0.0]);
    assert_eq!(cost, 0.0);
}

#[test]
fn adjacent_policy_clamps_outside_the_fitted_range() {
    let est = Mdl::multinomial(array![1.0, 1.0, 2.0, 2.0, 2.0]).unwrap();

    // Below the minimum: smallest fitted value's probability (0.4)
    let below = est.encode_with(&array![0.25], AbsentValuePolicy::Adjacent);
    assert_abs_diff_eq!(below, -(0.4f64.ln()), epsilon = 1e-12);

    // Above the maximum: largest fitted value's probability (0.6)
    let above = est.encode_with(&array![9.0], AbsentValuePolicy::Adjacent);
    assert_abs_diff_eq!(above, -(0.6f64.ln()), epsilon = 1e-12);
}

#[test]
fn adjacent_policy_uses_the_nearer_neighbour() {
    let est = Mdl::multinomial(array![1.0, 1.0, 2.0, 2.0, 2.0]).unwrap();

    let near_left = est.encode_with(&array![1.2], AbsentValuePolicy::Adjacent);
    assert_abs_diff_eq!(near_left, -(0.4f64.ln()), epsilon = 1e-12);

    let near_right = est.encode_with(&array![1.9], AbsentValuePolicy::Adjacent);
    assert_abs_diff_eq!(near_right, -(0.6f64.ln()), epsilon = 1e-12);
}

#[test]
fn adjacent_tie_break_prefers_the_cheaper_neighbour() {
    // Equal-probability neighbours: either one, never the uniform fallback
    let est = Mdl::multinomial(array![1.0, 3.0]).unwrap();
    let cost = est.encode_with(&array![2.0], AbsentValuePolicy::Adjacent);
    assert_abs_diff_eq!(cost, -(0.5f64.ln()), epsilon = 1e-12);

    // Unequal probabilities: the higher one wins the tie
    let est = Mdl::multinomial(array![1.0, 1.0, 3.0]).unwrap();
    let cost = est.encode_with(&array![2.0], AbsentValuePolicy::Adjacent);
    assert_abs_diff_eq!(cost, -((2.0f64 / 3.0).ln()), epsilon = 1e-12);
}

#[test]
fn default_policy_is_uniform() {
    let est = Mdl::multinomial(array![1.0, 3.0]).unwrap();
    let via_trait = est.encode(&array![2.0]);
    let via_policy = est.encode_with(&array![2.0], AbsentValuePolicy::Uniform);
    assert_eq!(via_trait, via_policy);
    assert_abs_diff_eq!(via_trait, 4.0f64.ln(), epsilon = 1e-12);
}

#[test]
fn mixed_query_accumulates_per_value_costs() {
    let est = Mdl::multinomial(array![1.0, 1.0, 2.0, 2.0, 2.0]).unwrap();
    // 1.0 present twice, 7.0 absent once; max|q| = 7
    let cost = est.encode(&array![1.0, 7.0, 1.0]);
    let expected = 2.0 * -(0.4f64.ln()) + 14.0f64.ln();
    assert_abs_diff_eq!(cost, expected, epsilon = 1e-12);
}
