use trigram_index::{
    CountError, CounterConfig, DEFAULT_CHUNK_SIZE, TieBreak, Triplet, TripletCounter,
};
use trigram_text::{TextBuffer, words};

/// Spell `n` as a lowercase base-26 word so every number is a distinct token.
fn letters(mut n: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'a' + (n % 26) as u8);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    String::from_utf8(out).expect("ascii")
}

#[test]
fn ranks_the_sample_text_end_to_end() {
    let mut text = TextBuffer::from_bytes("The cat sat on the mat. The CAT sat!");
    let mut counter = TripletCounter::default();
    let triplets = counter.count_words(text.words()).expect("count");
    assert_eq!(triplets, 7);

    let lines: Vec<String> = counter
        .top(3, TieBreak::FirstSeen)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec!["the cat sat - 2", "cat sat on - 1", "sat on the - 1"]
    );
}

#[test]
fn punctuation_only_text_has_too_few_words() {
    let mut buf = b"Hi!!! ... 123 -- there".to_vec();
    let mut counter = TripletCounter::default();
    match counter.count_words(words(&mut buf)) {
        Err(CountError::TooFewWords { words }) => assert_eq!(words, 2),
        other => panic!("expected too-few-words, got {other:?}"),
    }
    assert_eq!(counter.stats().distinct, 0);
}

#[test]
fn grows_past_one_chunk_without_corrupting_records() {
    let distinct = DEFAULT_CHUNK_SIZE + 500;
    let vocabulary: Vec<String> = (0..distinct + 2).map(letters).collect();

    let mut counter = TripletCounter::new(CounterConfig::default());
    // Two passes over the same sequence: every triplet is seen exactly twice.
    let stream = vocabulary.iter().chain(vocabulary.iter()).map(String::as_str);
    counter.count_words(stream).expect("count");

    let stats = counter.stats();
    assert_eq!(stats.chunks, 2);
    assert_eq!(stats.collisions, 0);
    // The seam between the passes adds two extra one-off triplets.
    assert_eq!(stats.distinct, distinct + 2);

    for window in vocabulary.windows(3) {
        let key = Triplet::new(&window[0], &window[1], &window[2]);
        assert_eq!(counter.count_of(&key), 2, "count for {key}");
    }

    let top = counter.top(3, TieBreak::FirstSeen);
    let firsts: Vec<u32> = top.iter().map(|r| r.first_seen).collect();
    assert_eq!(firsts, vec![0, 1, 2]);
}

#[test]
fn small_chunks_behave_like_large_ones() {
    let text = "to be or not to be that is the question to be or not";
    let mut small = TripletCounter::new(CounterConfig {
        chunk_size: 1,
        seed: 0,
    });
    let mut large = TripletCounter::default();
    small.count_words(text.split(' ')).expect("count");
    large.count_words(text.split(' ')).expect("count");

    assert_eq!(
        small.top(5, TieBreak::Lexicographic),
        large.top(5, TieBreak::Lexicographic)
    );
    assert_eq!(small.stats().chunks, small.stats().distinct);
    assert_eq!(large.stats().chunks, 1);
}
