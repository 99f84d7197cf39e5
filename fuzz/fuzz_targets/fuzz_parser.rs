#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use obvious_json::{Cursor, Map, Outcome, Parser, ParserOptions, Value};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 1; // option flags

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    "\u{00A0}".as_bytes(),
    "\u{1680}".as_bytes(),
    "\u{2003}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{3000}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x0F);

        let mut prefix = HEADER;
        let limit = max_size - prefix;
        prefix += append_whitespace(&mut data[prefix..], limit);
        let limit = max_size - prefix;
        prefix += append_value(&mut data[prefix..], size.max(8), limit);
        let limit = max_size - prefix;
        prefix += append_whitespace(&mut data[prefix..], limit);
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Appends up to eight whitespace characters without exceeding `limit`.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }
        let mut written = 0;
        for _ in 0..rng.random_range(1..=limit.min(8)) {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(serde_json::Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        use serde_json::Value as J;
        let value = match u.choose_index(21)? {
            0 => J::Null,
            1 => J::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                J::Number(serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?)
            }
            3..=10 => J::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                J::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                J::Object(m.into_iter().map(|(k, v)| (k, v.0)).collect())
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn from_reference(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Array(items.into_iter().map(from_reference).collect()),
        serde_json::Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k, from_reference(v)))
                .collect::<Map>(),
        ),
    }
}

fn approx_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        // Digit accumulation overflows and underflows before a correctly
        // rounded reader does, so magnitudes near the limits only need to agree
        // on being extreme. NaN is never a JSON number and never matches.
        (Value::Number(x), Value::Number(y)) => {
            if x.is_nan() || y.is_nan() {
                return false;
            }
            let extreme = |n: f64| n.is_infinite() || n.abs() > 1e300 || n.abs() < 1e-300;
            x == y
                || (extreme(*x) && extreme(*y))
                || (x - y).abs() <= 1e-9 * x.abs().max(y.abs())
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| approx_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|((kx, x), (ky, y))| kx == ky && approx_eq(x, y))
        }
        _ => a == b,
    }
}

fn parser(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let text = String::from_utf8_lossy(&data[HEADER..]).into_owned();

    let options = ParserOptions {
        decode_unicode_escapes: flags & 1 != 0,
        allow_unicode_whitespace: flags & 2 != 0,
        max_depth: if flags & 4 != 0 { None } else { Some(ParserOptions::DEFAULT_MAX_DEPTH) },
        reject_trailing_content: flags & 8 != 0,
    };

    // Unbounded nesting is only safe for inputs the stack can hold.
    if options.max_depth.is_none() && text.len() > 4096 {
        return;
    }

    let outcome = Parser::new(options).value(Cursor::new(&text));
    if let Outcome::Valid(_, cursor) = &outcome {
        assert!(cursor.position() <= text.len());
        assert!(text.is_char_boundary(cursor.position()));
    }

    // Whatever the reference parser accepts, a decoding strict parse accepts
    // with the same value.
    let Ok(reference) = serde_json::from_str::<serde_json::Value>(&text) else {
        return;
    };
    let strict = Parser::new(ParserOptions {
        max_depth: None,
        ..ParserOptions::strict()
    });
    let parsed = strict
        .parse(&text)
        .unwrap_or_else(|err| panic!("rejected {text:?}: {err}"));
    let expected = from_reference(reference);
    assert!(
        approx_eq(&parsed.data, &expected),
        "{:?} != {expected:?}",
        parsed.data
    );
}

fuzz_target!(|data: &[u8]| parser(data));
