use chrono::{Days, NaiveDate};
use core_types::{PricePoint, PriceSeries, SignalKind};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strategies::Strategy as _;
use strategies::{MACrossover, MACrossoverSettings, compute, detect};

fn series_of(closes: &[Decimal]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, c)| PricePoint::from_close(start + Days::new(i as u64), *c))
        .collect();
    PriceSeries::new(points).unwrap()
}

fn run(closes: &[Decimal], short: u32, long: u32) -> strategies::CrossoverAnalysis {
    MACrossover::new(MACrossoverSettings::new(short, long))
        .evaluate(&series_of(closes))
        .unwrap()
}

#[test]
fn step_up_fires_a_single_buy() {
    let closes = [
        dec!(10), dec!(10), dec!(10), dec!(10), dec!(10),
        dec!(20), dec!(20), dec!(20), dec!(20), dec!(20),
    ];
    let analysis = run(&closes, 2, 4);

    assert!(analysis.short_average.value_at(0).is_none());
    assert_eq!(analysis.short_average.value_at(1), Some(dec!(10)));
    assert!(analysis.long_average.value_at(2).is_none());
    assert_eq!(analysis.long_average.value_at(3), Some(dec!(10)));

    assert_eq!(analysis.signals.len(), 1);
    let buy = analysis.signals[0];
    assert_eq!(buy.kind, SignalKind::Buy);
    assert_eq!(buy.date, NaiveDate::from_ymd_opt(2023, 1, 7).unwrap());
    assert_eq!(buy.price, dec!(20));
}

#[test]
fn step_down_fires_a_single_sell() {
    let closes = [
        dec!(20), dec!(20), dec!(20), dec!(20), dec!(20),
        dec!(10), dec!(10), dec!(10), dec!(10), dec!(10),
    ];
    let analysis = run(&closes, 2, 4);
    let kinds: Vec<_> = analysis.signals.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SignalKind::Sell]);
}

#[test]
fn flat_series_never_signals() {
    let closes = vec![dec!(42.17); 30];
    for (short, long) in [(1, 2), (2, 4), (5, 20), (20, 5), (3, 3)] {
        assert!(run(&closes, short, long).signals.is_empty());
    }
}

#[test]
fn empty_series_is_not_an_error() {
    let analysis = run(&[], 2, 4);
    assert!(analysis.short_average.is_empty());
    assert!(analysis.long_average.is_empty());
    assert!(analysis.signals.is_empty());
}

#[test]
fn series_shorter_than_long_window_is_silent() {
    let closes = [dec!(1), dec!(5), dec!(2), dec!(9)];
    let analysis = run(&closes, 2, 5);
    assert_eq!(analysis.long_average.defined_count(), 0);
    assert!(analysis.signals.is_empty());
}

#[test]
fn oscillating_series_alternates() {
    let closes = [
        dec!(1), dec!(1), dec!(1), dec!(5), dec!(5), dec!(5),
        dec!(1), dec!(1), dec!(1), dec!(5), dec!(5), dec!(5),
    ];
    let analysis = run(&closes, 1, 3);
    let kinds: Vec<_> = analysis.signals.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![SignalKind::Buy, SignalKind::Sell, SignalKind::Buy]
    );
}

#[test]
fn malformed_close_only_blanks_its_windows() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let closes = [Some(dec!(10)), Some(dec!(10)), None, Some(dec!(20)), Some(dec!(20)), Some(dec!(20))];
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, c)| PricePoint {
            date: start + Days::new(i as u64),
            open: None,
            high: None,
            low: None,
            close: *c,
            volume: None,
        })
        .collect();
    let series = PriceSeries::new(points).unwrap();

    let (short, long) = compute(&series, 1, 2).unwrap();
    assert_eq!(short.value_at(2), None);
    assert_eq!(long.value_at(2), None);
    assert_eq!(long.value_at(3), None);
    assert_eq!(long.value_at(4), Some(dec!(20)));

    // The gap suppresses the jump that would otherwise have been a buy.
    assert!(detect(&series, &short, &long).unwrap().is_empty());
}

fn closes_strategy() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(1u32..=60, 0..80)
        .prop_map(|raw| raw.into_iter().map(Decimal::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn first_full_window_is_the_plain_mean(
        closes in closes_strategy(),
        window in 1usize..=20,
    ) {
        let series = series_of(&closes);
        let avg = strategies::simple_moving_average(&series, window).unwrap();
        prop_assert_eq!(avg.len(), closes.len());

        for i in 0..window.saturating_sub(1).min(closes.len()) {
            prop_assert!(avg.value_at(i).is_none());
        }
        if window <= closes.len() {
            let mean = closes[..window].iter().copied().sum::<Decimal>() / Decimal::from(window);
            prop_assert_eq!(avg.value_at(window - 1), Some(mean));
        }
    }

    #[test]
    fn signals_are_bounded_ordered_and_repeatable(
        closes in closes_strategy(),
        short in 1u32..=10,
        long in 1u32..=25,
    ) {
        let first = run(&closes, short, long);
        let second = run(&closes, short, long);
        prop_assert_eq!(&first, &second);

        prop_assert!(first.signals.len() <= closes.len().saturating_sub(1));
        prop_assert!(first.signals.windows(2).all(|w| w[0].date < w[1].date));

        if closes.len() < long as usize {
            prop_assert!(first.signals.is_empty());
        }
    }

    #[test]
    fn repeated_kind_requires_a_touch_in_between(
        closes in closes_strategy(),
        short in 1u32..=10,
        long in 1u32..=25,
    ) {
        let series = series_of(&closes);
        let analysis = run(&closes, short, long);
        let index_of = |date| series.iter().position(|p| p.date == date).unwrap();

        for pair in analysis.signals.windows(2) {
            if pair[0].kind != pair[1].kind {
                continue;
            }
            let (from, to) = (index_of(pair[0].date), index_of(pair[1].date));
            let touched = (from..to).any(|k| {
                let s = analysis.short_average.value_at(k).unwrap();
                let l = analysis.long_average.value_at(k).unwrap();
                match pair[0].kind {
                    SignalKind::Buy => s <= l,
                    SignalKind::Sell => s >= l,
                }
            });
            prop_assert!(touched);
        }
    }
}
