/// English stop words (NLTK English list).
///
/// Note: The retweet marker is included as `rt` since text is lowercased before the stop word
/// check runs.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
    // Retweet marker
    "rt",
];

/// Korean stop words: particles, copulas, common discourse fillers and low-signal adverbs.
pub const KOREAN_STOP_WORDS: &[&str] = &[
    "에서", "이", "의", "로", "에", "과", "도", "를", "으로", "한", "하다", "와", "에게", "등",
    "으로부터", "이다", "하는", "안", "내", "늘", "들", "아", "못", "기", "거", "때", "것", "저",
    "임", "또", "더", "수", "말", "중", "나", "함", "게", "해", "왜", "보고", "그", "뭐", "고",
    "좀", "네", "이제", "없다", "아니다", "있다", "안되다", "같다", "대한", "그렇다", "정말",
    "이번", "그냥", "때문", "진짜", "지금", "어떻다", "그거", "오늘", "아마", "이렇다", "조금",
    "다시", "여러", "한번", "어디", "누가", "무엇", "어떤", "대해", "이런", "그런", "다른",
    "어떻게", "모든", "우리", "하지", "있는", "마음", "정도", "지난", "이미", "앞으로", "부터",
    "사이", "역시", "대로", "이내", "가장", "더욱", "이후", "경우", "그대로", "다만", "만큼",
    "가지", "면서", "동안", "바로", "보다", "이나", "위해", "된다", "하고", "한테", "까지",
    "따라", "비해", "서는", "로서", "로써", "이고", "인데", "처럼", "하며", "하면", "항상",
    "해도", "해야", "혹은", "혹시",
];

/// mecab-ko-dic part-of-speech tags treated as nouns (common, proper, bound, unit-bound, pronoun).
pub const KOREAN_NOUN_TAGS: &[&str] = &["NNG", "NNP", "NNB", "NNBC", "NP"];

/// mecab-ko-dic part-of-speech tags treated as adjectives.
pub const KOREAN_ADJECTIVE_TAGS: &[&str] = &["VA"];

/// Tags of roots that form an adjective with a following adjective-deriving suffix
/// (`깨끗/XR` + `하/XSA`, `행복/NNG` + `하/XSA`).
pub const KOREAN_ADJECTIVE_ROOT_TAGS: &[&str] = &["XR", "NNG"];

/// Adjective-deriving suffix tags (`하`, `스럽`, `롭`).
pub const KOREAN_ADJECTIVE_SUFFIX_TAGS: &[&str] = &["XSA"];

/// Tag given to an adjective assembled from a root and a deriving suffix.
pub const KOREAN_DERIVED_ADJECTIVE_TAG: &str = "VA";

/// Suffix appended to predicate stems to restore their dictionary form (e.g. `좋` -> `좋다`).
pub const KOREAN_DICTIONARY_FORM_SUFFIX: &str = "다";

/// Separator between the `TITLE` and `PATH` halves of a `--dataset` CLI argument.
pub const DATASET_ARG_SEPARATOR: char = '=';

/// Datasets analyzed when none are given on the command line.
pub const DEFAULT_DATASETS: &[(&str, &str)] = &[
    ("MapleStory Tweets", "메이플.json"),
    ("Overwatch Tweets", "오버워치.json"),
];
