use recase::transform::case;
use recase::{
    BankStore, CaseStyle, EditHistory, JsonFileStore, LexicalTables, Session, Singularization,
    TitleCaser, WordBank,
};

fn tables() -> LexicalTables {
    LexicalTables::builtin().unwrap()
}

#[test]
fn title_case_examples() {
    let tables = tables();
    let caser = TitleCaser::new(&tables);
    assert_eq!(caser.apply(""), "");
    assert_eq!(
        caser.apply("the quick-brown foxes and the lazy-dogs"),
        "Quick-Brown Foxes and Lazy-Dogs"
    );
    assert_eq!(caser.apply("AI & ML in IoT"), "AI ML IoT");
}

#[test]
fn case_transforms_compose() {
    let samples = ["", "MiXeD case 123", "ünïcödé ÀÉÎ", "tab\tand\nnewline", "ß and ǅ"];
    for s in samples {
        assert_eq!(case::inverse_case(&case::inverse_case(s)), s);
        assert_eq!(case::upper(&case::lower(s)), case::upper(s));
        assert_eq!(case::lower(&case::upper(s)), case::lower(s));
    }
}

#[test]
fn history_walkthrough() {
    let mut history = EditHistory::new("a");
    history.snapshot("ab");
    history.snapshot("abc");

    assert_eq!(history.undo(), "ab");
    let mut branch = history.clone();
    assert_eq!(branch.redo().as_deref(), Some("abc"));

    assert_eq!(history.undo(), "a");
    assert_eq!(history.undo(), "");
    assert_eq!(history.undo(), "");
}

#[test]
fn history_never_exceeds_capacity() {
    let mut history = EditHistory::new("start");
    for i in 0..250 {
        history.snapshot(format!("edit {}", i));
        assert!(history.len() <= history.capacity());
    }
    assert_eq!(history.len(), 100);
}

#[test]
fn word_bank_ordering() {
    let mut bank = WordBank::default();
    bank.add("x");
    bank.add("y");
    bank.add("x");
    assert_eq!(bank.iter().collect::<Vec<_>>(), vec!["x", "y"]);
    bank.remove("x");
    bank.add("x");
    assert_eq!(bank.iter().collect::<Vec<_>>(), vec!["y", "x"]);
}

#[test]
fn bank_survives_across_sessions_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut session = Session::new(tables(), Box::new(JsonFileStore::new(dir.path())));
        session.select("Rustacean");
        session.bank_add("ferris");
        session.set_bank_active(false);
    }

    let store = JsonFileStore::new(dir.path());
    let saved = store.load().unwrap();
    assert_eq!(saved.word_bank, vec!["Rustacean", "ferris"]);
    assert!(!saved.bank_active);

    let mut session = Session::new(tables(), Box::new(store)).with_text("hello");
    assert!(!session.select("ignored while inactive"));
    assert!(session.insert_from_bank("ferris"));
    assert_eq!(session.buffer(), "hello ferris");
}

#[test]
fn full_editing_round() {
    let mut session = Session::new(tables(), Box::new(recase::MemoryStore::new()))
        .with_singularization(Singularization::Aggressive);

    session.edit("top 10 cloud solutions & api gateways");
    assert_eq!(session.apply(CaseStyle::Title), "Top 10 Cloud Solution API Gateway");
    assert_eq!(session.apply(CaseStyle::Lower), "top 10 cloud solution api gateway");
    assert_eq!(session.apply(CaseStyle::Sentence), "Top 10 cloud solution api gateway");
    assert_eq!(session.apply(CaseStyle::Capitalize), "Top 10 Cloud Solution Api Gateway");
    assert_eq!(session.apply(CaseStyle::Inverse), "tOP 10 cLOUD sOLUTION aPI gATEWAY");

    assert_eq!(session.undo(), "Top 10 Cloud Solution Api Gateway");
    assert_eq!(session.undo(), "Top 10 cloud solution api gateway");
    assert_eq!(session.redo(), "Top 10 Cloud Solution Api Gateway");

    session.apply(CaseStyle::Upper);
    assert!(!session.history().can_redo());
}
