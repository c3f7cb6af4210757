// ---------------------------------------------------------------------------
// Tokenizer — text normalization for the recommendation corpus
// ---------------------------------------------------------------------------
//
// Lowercases free text, splits it on a fixed delimiter class, drops
// Czech and English stop words, and folds diacritics so accented and
// unaccented forms of the same root collapse to one term. Pure
// functions, safe to call from concurrent scoring passes.
// ---------------------------------------------------------------------------

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Static data
// ---------------------------------------------------------------------------

/// Delimiters: whitespace (including newline and carriage return) plus
/// the punctuation that separates metadata fragments in catalog records.
const DELIMITER_PATTERN: &str = r#"[\s,.;:\-_!?()\[\]{}"]+"#;

/// Czech stop words, kept in their accented form because stop-word
/// removal runs before diacritic folding.
const STOP_WORDS_CS: &[&str] = &[
	"a", "aby", "ale", "ani", "ano", "až", "bez", "bude", "budeme", "budete", "by", "byl",
	"byla", "byli", "bylo", "být", "co", "což", "či", "další", "do", "ho", "i", "já", "jak",
	"jako", "je", "jeho", "jejich", "její", "jen", "ještě", "ji", "již", "jsem", "jsi", "jsme",
	"jsou", "jste", "k", "kde", "kdo", "když", "ke", "která", "které", "který", "kteří", "ku",
	"má", "mají", "mezi", "mi", "mít", "na", "nad", "nám", "nás", "ne", "nebo", "není", "než",
	"nic", "o", "od", "on", "ona", "oni", "ono", "pak", "po", "pod", "podle", "pokud", "pouze",
	"pro", "proč", "proto", "protože", "před", "přes", "při", "s", "se", "si", "své", "svůj",
	"ta", "tak", "také", "tam", "tato", "tedy", "ten", "tento", "této", "tím", "to", "toho",
	"tomu", "tu", "tuto", "ty", "u", "už", "v", "ve", "více", "však", "všech", "z", "za", "ze",
	"že",
];

const STOP_WORDS_EN: &[&str] = &[
	"a", "about", "after", "again", "all", "also", "an", "and", "any", "are", "as", "at", "be",
	"because", "been", "before", "being", "between", "both", "but", "by", "can", "could", "did",
	"do", "does", "down", "during", "each", "few", "for", "from", "further", "had", "has",
	"have", "he", "her", "here", "him", "his", "how", "i", "if", "in", "into", "is", "it",
	"its", "just", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on", "once",
	"only", "or", "other", "our", "out", "over", "own", "same", "she", "should", "so", "some",
	"such", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
	"those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
	"what", "when", "where", "which", "while", "who", "why", "will", "with", "would", "you",
	"your",
];

fn delimiters() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(DELIMITER_PATTERN).expect("delimiter pattern is valid"))
}

fn stop_words() -> &'static HashSet<&'static str> {
	static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
	SET.get_or_init(|| {
		STOP_WORDS_CS
			.iter()
			.chain(STOP_WORDS_EN.iter())
			.copied()
			.collect()
	})
}

// ---------------------------------------------------------------------------
// Diacritic folding
// ---------------------------------------------------------------------------

/// Replace accented Latin characters with their base letter. Covers the
/// Czech alphabet plus the accents that show up in imported records.
pub fn fold_diacritics(text: &str) -> String {
	text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
	match c {
		'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
		'č' | 'ç' | 'ć' => 'c',
		'ď' => 'd',
		'é' | 'è' | 'ê' | 'ë' | 'ě' => 'e',
		'í' | 'ì' | 'î' | 'ï' => 'i',
		'ľ' | 'ĺ' | 'ł' => 'l',
		'ň' | 'ñ' | 'ń' => 'n',
		'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
		'ř' => 'r',
		'š' | 'ś' => 's',
		'ť' => 't',
		'ú' | 'ů' | 'ù' | 'û' | 'ü' => 'u',
		'ý' | 'ÿ' => 'y',
		'ž' | 'ź' | 'ż' => 'z',
		'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
		'Č' | 'Ç' | 'Ć' => 'C',
		'Ď' => 'D',
		'É' | 'È' | 'Ê' | 'Ë' | 'Ě' => 'E',
		'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
		'Ľ' | 'Ĺ' | 'Ł' => 'L',
		'Ň' | 'Ñ' | 'Ń' => 'N',
		'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
		'Ř' => 'R',
		'Š' | 'Ś' => 'S',
		'Ť' => 'T',
		'Ú' | 'Ů' | 'Ù' | 'Û' | 'Ü' => 'U',
		'Ý' => 'Y',
		'Ž' | 'Ź' | 'Ż' => 'Z',
		other => other,
	}
}

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

/// Split `text` into normalized terms: lowercased, delimiter-split, stop
/// words removed, diacritics folded. Blank input yields no terms.
pub fn tokenize(text: &str) -> Vec<String> {
	if text.trim().is_empty() {
		return Vec::new();
	}
	let lower = text.to_lowercase();
	delimiters()
		.split(&lower)
		.filter(|fragment| !fragment.is_empty())
		.filter(|fragment| !stop_words().contains(*fragment))
		.map(fold_diacritics)
		.collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_input_yields_no_terms() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("   \r\n  ").is_empty());
	}

	#[test]
	fn lowercases_and_splits_on_delimiters() {
		assert_eq!(
			tokenize("One_Two-Three(Four)"),
			vec!["one", "two", "three", "four"]
		);
	}

	#[test]
	fn splits_on_punctuation_and_newlines() {
		assert_eq!(
			tokenize("alpha, beta; gamma:\r\ndelta!"),
			vec!["alpha", "beta", "gamma", "delta"]
		);
	}

	#[test]
	fn removes_english_stop_words() {
		assert_eq!(tokenize("the quick and the dead"), vec!["quick", "dead"]);
	}

	#[test]
	fn removes_czech_stop_words() {
		// "a" and "že" are stop words, "ano" as well.
		assert_eq!(tokenize("pes a kočka"), vec!["pes", "kocka"]);
		assert_eq!(tokenize("vím, že ano"), vec!["vim"]);
	}

	#[test]
	fn folds_diacritics_after_stop_word_removal() {
		assert_eq!(
			tokenize("Příliš žluťoučký kůň úpěl ódy"),
			vec!["prilis", "zlutoucky", "kun", "upel", "ody"]
		);
	}

	#[test]
	fn fold_diacritics_handles_both_cases() {
		assert_eq!(fold_diacritics("Žluťoučký"), "Zlutoucky");
		assert_eq!(fold_diacritics("café naïve"), "cafe naive");
		assert_eq!(fold_diacritics("plain"), "plain");
	}

	#[test]
	fn keeps_unlisted_delimiters_inside_tokens() {
		// The apostrophe is not a delimiter.
		assert_eq!(tokenize("philosopher's stone"), vec!["philosopher's", "stone"]);
	}

	#[test]
	fn deterministic_across_calls() {
		let text = "Harry Potter and the Chamber of Secrets";
		assert_eq!(tokenize(text), tokenize(text));
		assert_eq!(
			tokenize(text),
			vec!["harry", "potter", "chamber", "secrets"]
		);
	}
}
