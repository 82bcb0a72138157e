//! Generator implementations backing the table in the crate root.

use chrono::{Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

use crate::FakeError;

const FIRST_NAMES: &[&str] = &[
	"Ada", "Alan", "Barbara", "Claude", "Dennis", "Edsger", "Frances", "Grace", "Ken", "Linus",
	"Margaret", "Niklaus", "Radia", "Sophie", "Tony",
];

const LAST_NAMES: &[&str] = &[
	"Allen", "Hamilton", "Hoare", "Hopper", "Knuth", "Lamport", "Liskov", "Lovelace", "Perlman",
	"Ritchie", "Thompson", "Torvalds", "Turing", "Wilson", "Wirth",
];

const WORDS: &[&str] = &[
	"alias", "amet", "beatae", "culpa", "dolor", "eius", "fugit", "ipsum", "labore", "lorem",
	"magnam", "nihil", "omnis", "quia", "ratione", "sit", "tempora", "ut", "velit", "voluptas",
];

const CITIES: &[&str] = &[
	"Amsterdam", "Berlin", "Lagos", "Lima", "Lisbon", "Montreal", "Nairobi", "Osaka", "Oslo",
	"Portland", "Seoul", "Tallinn",
];

const COMPANY_SUFFIXES: &[&str] = &["Group", "Inc", "LLC", "and Sons", "Labs", "Partners"];

const DOMAINS: &[&str] = &["example.com", "example.net", "example.org"];

const TLDS: &[&str] = &["com", "net", "org", "io", "dev"];

/// Upper bound on word and character counts.
const MAX_COUNT: u64 = 10_000;

fn pick(list: &'static [&'static str]) -> &'static str {
	list.choose(&mut rand::thread_rng()).copied().unwrap_or_default()
}

/// Read an optional non-negative integer argument at `index`, at most `max`.
fn count_arg(
	generator: &'static str,
	args: &[Value],
	index: usize,
	max: u64,
) -> Result<Option<u64>, FakeError> {
	let count = match args.get(index) {
		None | Some(Value::Null) => return Ok(None),
		Some(value) => value.as_u64().ok_or_else(|| FakeError::InvalidArgument {
			generator,
			reason: format!("expected a non-negative integer, got {}", value),
		})?,
	};
	if count > max {
		return Err(FakeError::InvalidArgument {
			generator,
			reason: format!("{} exceeds the limit of {}", count, max),
		});
	}
	Ok(Some(count))
}

pub fn uuid(_args: &[Value]) -> Result<Value, FakeError> {
	Ok(Value::String(uuid::Uuid::new_v4().to_string()))
}

/// `random.number()`, `random.number(max)` or `random.number({"min": a, "max": b})`.
pub fn number(args: &[Value]) -> Result<Value, FakeError> {
	const NAME: &str = "random.number";
	let (min, max) = match args.first() {
		None | Some(Value::Null) => (0, 99_999),
		Some(Value::Object(options)) => {
			let bound = |key: &str, default: i64| match options.get(key) {
				None => Ok(default),
				Some(value) => value.as_i64().ok_or_else(|| FakeError::InvalidArgument {
					generator: NAME,
					reason: format!("'{}' must be an integer, got {}", key, value),
				}),
			};
			(bound("min", 0)?, bound("max", 99_999)?)
		}
		Some(value) => {
			let max = value.as_i64().ok_or_else(|| FakeError::InvalidArgument {
				generator: NAME,
				reason: format!("expected an integer or an options object, got {}", value),
			})?;
			(0, max)
		}
	};

	if max < min {
		return Err(FakeError::InvalidArgument {
			generator: NAME,
			reason: format!("max {} is less than min {}", max, min),
		});
	}

	Ok(Value::from(rand::thread_rng().gen_range(min..=max)))
}

pub fn boolean(_args: &[Value]) -> Result<Value, FakeError> {
	Ok(Value::Bool(rand::thread_rng().gen()))
}

pub fn word(_args: &[Value]) -> Result<Value, FakeError> {
	Ok(Value::String(pick(WORDS).to_string()))
}

pub fn words(args: &[Value]) -> Result<Value, FakeError> {
	let count = count_arg("lorem.words", args, 0, MAX_COUNT)?.unwrap_or(3);
	let words: Vec<&str> = (0..count).map(|_| pick(WORDS)).collect();
	Ok(Value::String(words.join(" ")))
}

pub fn sentence(args: &[Value]) -> Result<Value, FakeError> {
	let count = match count_arg("lorem.sentence", args, 0, MAX_COUNT)? {
		Some(count) => count,
		None => rand::thread_rng().gen_range(3..=10),
	};
	let mut sentence = (0..count).map(|_| pick(WORDS)).collect::<Vec<_>>().join(" ");
	if let Some(first) = sentence.get(..1).map(str::to_uppercase) {
		sentence.replace_range(..1, &first);
	}
	sentence.push('.');
	Ok(Value::String(sentence))
}

pub fn alpha_numeric(args: &[Value]) -> Result<Value, FakeError> {
	let count = count_arg("random.alphaNumeric", args, 0, MAX_COUNT)?.unwrap_or(1);
	let text: String = rand::thread_rng()
		.sample_iter(&Alphanumeric)
		.take(count as usize)
		.map(|byte| char::from(byte).to_ascii_lowercase())
		.collect();
	Ok(Value::String(text))
}

pub fn first_name(_args: &[Value]) -> Result<Value, FakeError> {
	Ok(Value::String(pick(FIRST_NAMES).to_string()))
}

pub fn last_name(_args: &[Value]) -> Result<Value, FakeError> {
	Ok(Value::String(pick(LAST_NAMES).to_string()))
}

pub fn full_name(_args: &[Value]) -> Result<Value, FakeError> {
	Ok(Value::String(format!("{} {}", pick(FIRST_NAMES), pick(LAST_NAMES))))
}

pub fn email(_args: &[Value]) -> Result<Value, FakeError> {
	let suffix: u16 = rand::thread_rng().gen_range(0..1000);
	Ok(Value::String(format!(
		"{}.{}{}@{}",
		pick(FIRST_NAMES).to_lowercase(),
		pick(LAST_NAMES).to_lowercase(),
		suffix,
		pick(DOMAINS)
	)))
}

pub fn user_name(_args: &[Value]) -> Result<Value, FakeError> {
	let suffix: u16 = rand::thread_rng().gen_range(0..100);
	Ok(Value::String(format!("{}_{}{}", pick(FIRST_NAMES), pick(LAST_NAMES), suffix)))
}

pub fn url(_args: &[Value]) -> Result<Value, FakeError> {
	Ok(Value::String(format!("https://{}.{}", pick(WORDS), pick(TLDS))))
}

pub fn ip(_args: &[Value]) -> Result<Value, FakeError> {
	let octets: [u8; 4] = rand::thread_rng().gen();
	Ok(Value::String(format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])))
}

pub fn city(_args: &[Value]) -> Result<Value, FakeError> {
	Ok(Value::String(pick(CITIES).to_string()))
}

pub fn zip_code(_args: &[Value]) -> Result<Value, FakeError> {
	let code: u32 = rand::thread_rng().gen_range(0..100_000);
	Ok(Value::String(format!("{:05}", code)))
}

pub fn company_name(_args: &[Value]) -> Result<Value, FakeError> {
	Ok(Value::String(format!("{} {}", pick(LAST_NAMES), pick(COMPANY_SUFFIXES))))
}

pub fn phone_number(_args: &[Value]) -> Result<Value, FakeError> {
	let mut rng = rand::thread_rng();
	Ok(Value::String(format!(
		"{:03}-{:03}-{:04}",
		rng.gen_range(200..1000),
		rng.gen_range(0..1000),
		rng.gen_range(0..10_000)
	)))
}

/// A timestamp within the last `days` days (default 1), RFC 3339 formatted.
pub fn recent_date(args: &[Value]) -> Result<Value, FakeError> {
	const NAME: &str = "date.recent";
	let out_of_range = |days: u64| FakeError::InvalidArgument {
		generator: NAME,
		reason: format!("{} days is out of range", days),
	};

	let days = count_arg(NAME, args, 0, u64::MAX)?.unwrap_or(1).max(1);
	let seconds = i64::try_from(days)
		.ok()
		.and_then(|days| days.checked_mul(86_400))
		.ok_or_else(|| out_of_range(days))?;
	let offset = rand::thread_rng().gen_range(0..seconds);
	let date = Duration::try_seconds(offset)
		.and_then(|offset| Utc::now().checked_sub_signed(offset))
		.ok_or_else(|| out_of_range(days))?;
	Ok(Value::String(date.to_rfc3339()))
}
