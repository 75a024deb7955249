use quranize::{Location, Match, Quranize, TransliterationTable, VerseCorpus, VerseIndex};
use std::sync::LazyLock;

static CORPUS: LazyLock<VerseCorpus> =
    LazyLock::new(|| load_corpus(include_str!("data/verses.txt")));

static QURANIZE: LazyLock<Quranize> = LazyLock::new(|| Quranize::with_default_rules(&CORPUS));

/// Reads `sura|aya|text` lines into a corpus, leaving unlisted ayas empty.
fn load_corpus(data: &str) -> VerseCorpus {
    let mut suras: Vec<Vec<String>> = vec![Vec::new(); 114];
    for line in data.lines().filter(|l| !l.starts_with('#') && !l.trim().is_empty()) {
        let mut fields = line.splitn(3, '|');
        let sura: usize = fields.next().unwrap().parse().unwrap();
        let aya: usize = fields.next().unwrap().parse().unwrap();
        let text = fields.next().unwrap();

        let ayas = &mut suras[sura - 1];
        if ayas.len() < aya {
            ayas.resize(aya, String::new());
        }
        ayas[aya - 1] = text.to_string();
    }
    VerseCorpus::new(suras)
}

fn assert_encodes_to(input: &str, expected: &[&str]) {
    assert_eq!(QURANIZE.encode(input), expected, "encoding {input:?}");
}

#[test]
fn test_encode_single_words() {
    assert_encodes_to("bismillah", &["بسم الله"]);
    assert_encodes_to("alhamdulillah", &["الحمد لله"]);
    assert_encodes_to("kahfi", &["الكهف"]);
}

#[test]
fn test_encode_al_fatiha() {
    let cases = [
        ("bismillah hirrohman nirrohim", "بسم الله الرحمن الرحيم"),
        ("alhamdu lillahi robbil 'alamin", "الحمد لله رب العالمين"),
        ("arrohma nirrohim", "الرحمن الرحيم"),
        ("maaliki yau middin", "مالك يوم الدين"),
        ("iyya kanakbudu waiyya kanastain", "إياك نعبد وإياك نستعين"),
        ("ihdinash shirothol mustaqim", "اهدنا الصراط المستقيم"),
        (
            "shirotholladzina an'am ta'alaihim ghoiril maghdzu bi'alaihim waladh dhollin",
            "صراط الذين أنعمت عليهم غير المغضوب عليهم ولا الضالين",
        ),
    ];
    for (input, expected) in cases {
        assert_encodes_to(input, &[expected]);
    }
}

#[test]
fn test_encode_al_ikhlas() {
    assert_encodes_to("qul huwallahu ahad", &["قل هو الله أحد"]);
}

#[test]
fn test_encode_very_long_input() {
    let results = std::thread::spawn(|| QURANIZE.encode(&"b".repeat(100_000)))
        .join()
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_encode_ignores_spacing_and_case() {
    assert_eq!(quranize::normalize("Bismi Llah"), "bismillah");
    assert_eq!(QURANIZE.encode("Bismi Llah"), QURANIZE.encode("bismillah"));
}

#[test]
fn test_encode_elided_final_consonant() {
    // "robbil" has no whole-word decoding, "robbi" does
    assert_encodes_to("robbil", &["رب"]);
    assert_encodes_to("kahf", &["الكهف"]);

    let full = QURANIZE.encode("robbi");
    let elided = QURANIZE.encode("robbil");
    assert!(full.iter().all(|s| elided.contains(s)));
}

#[test]
fn test_encode_without_results() {
    assert!(QURANIZE.encode("").is_empty());
    assert!(QURANIZE.encode("   ").is_empty());
    assert!(QURANIZE.encode("nonarabicgarbage").is_empty());
    assert!(QURANIZE.encode("xyz").is_empty());
}

#[test]
fn test_encode_is_idempotent() {
    let first = QURANIZE.encode("bismillah hirrohman nirrohim");
    let second = QURANIZE.encode("bismillah hirrohman nirrohim");
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_encode_batch_preserves_order() {
    let inputs = ["kahfi", "", "alhamdulillah", "bismillah", "kahfi"];
    let batch = QURANIZE.encode_batch(&inputs);
    let sequential: Vec<Vec<String>> = inputs.iter().map(|s| QURANIZE.encode(s)).collect();
    assert_eq!(batch, sequential);
}

#[test]
fn test_shared_across_threads() {
    let expected = QURANIZE.encode("alhamdu lillahi robbil 'alamin");
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let quranize = QURANIZE.clone();
            let expected = &expected;
            scope.spawn(move || {
                assert_eq!(&quranize.encode("alhamdu lillahi robbil 'alamin"), expected);
            });
        }
    });
}

#[test]
fn test_locate_phrase_in_corpus_order() {
    let locations = QURANIZE.locate("بسم الله الرحمن الرحيم");
    assert_eq!(locations, [Location::new(1, 1, 0), Location::new(27, 30, 4)]);
    assert!(locations.windows(2).all(|w| w[0] < w[1]));
    assert!(locations.iter().all(|l| l.sura() >= 1 && l.aya() >= 1));
}

#[test]
fn test_locate_without_results() {
    assert!(QURANIZE.locate("").is_empty());
    assert!(QURANIZE.locate("alfan").is_empty());
    // inside a word
    assert!(QURANIZE.locate("الرح").is_empty());
    assert!(QURANIZE.locate("حمن").is_empty());
    assert!(QURANIZE.index().contains_prefix(""));
}

#[test]
fn test_locations_round_trip_to_the_corpus() {
    let inputs = [
        "bismillah",
        "alhamdulillah",
        "kahfi",
        "bismillah hirrohman nirrohim",
        "robbil",
    ];
    for input in inputs {
        for text in QURANIZE.encode(input) {
            let word_count = text.split(' ').count();
            for &location in QURANIZE.locate(&text) {
                assert_eq!(
                    CORPUS.words_at(location, word_count).as_deref(),
                    Ok(text.as_str()),
                    "{text:?} at {location}"
                );
            }
        }
    }
}

#[test]
fn test_search_attaches_locations() {
    let matches = QURANIZE.search("alhamdulillah");
    let hamd = matches
        .iter()
        .find(|m| m.text == "الحمد لله")
        .expect("missing match");
    assert_eq!(
        hamd,
        &Match {
            text: "الحمد لله".to_string(),
            locations: vec![Location::new(1, 2, 0)],
        }
    );

    let json: serde_json::Value =
        serde_json::from_str(&QURANIZE.search_json("alhamdulillah").unwrap()).unwrap();
    let entry = json
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["text"] == "الحمد لله")
        .unwrap();
    assert_eq!(entry["locations"][0]["sura"], 1);
    assert_eq!(entry["locations"][0]["aya"], 2);
    assert_eq!(entry["locations"][0]["word_index"], 0);
}

#[test]
fn test_empty_context() {
    let quranize = Quranize::new(
        TransliterationTable::build(Vec::<String>::new()),
        VerseIndex::build(&VerseCorpus::default()),
    );
    assert!(quranize.encode("bismillah").is_empty());
    assert!(quranize.locate("بسم").is_empty());
    assert!(quranize.search_json("bismillah").is_ok());
}
