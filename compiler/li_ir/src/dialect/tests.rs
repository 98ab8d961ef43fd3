use super::*;

#[test]
fn english_is_the_default() {
    assert_eq!(Dialect::default(), Dialect::english());
    assert_eq!(Dialect::default().keywords().function, "def");
    assert_eq!(Dialect::default().keywords().repeat, "while");
}

#[test]
fn lookup_accepts_names_and_codes() {
    assert_eq!(Dialect::by_name("french"), Some(Dialect::french()));
    assert_eq!(Dialect::by_name(" FR "), Some(Dialect::french()));
    assert_eq!(Dialect::by_name("en"), Some(Dialect::english()));
    assert_eq!(Dialect::by_name("klingon"), None);
}

#[test]
fn french_renames_catalog_entries() {
    let fr = Dialect::french();
    assert_eq!(fr.surface_name("print"), "affiche");
    assert_eq!(fr.surface_name("println"), "affiche_xa");
    assert_eq!(fr.surface_name("input"), "demande");
    assert_eq!(fr.surface_name("wait"), "attends");
    assert_eq!(fr.surface_name("+"), "+");
    assert_eq!(Dialect::english().surface_name("print"), "print");
}

#[test]
fn french_keeps_conditional_keywords() {
    let fr = Dialect::french();
    let kw = fr.keywords();
    assert_eq!(kw.conditional, "if");
    assert_eq!(kw.alternative, "elif");
    assert_eq!(kw.fallback, "else");
    assert_eq!(kw.function, "fonc");
    assert_eq!(kw.repeat, "tantque");
}

#[test]
fn structural_words_follow_the_dialect() {
    let en = Dialect::english();
    let fr = Dialect::french();
    for word in ["if", "def", "while", "params", "lit"] {
        assert!(en.is_structural(word), "{word}");
    }
    assert!(!en.is_structural("fonc"));
    assert!(fr.is_structural("fonc"));
    assert!(fr.is_structural("tantque"));
    assert!(!fr.is_structural("def"));
    assert!(!en.is_structural("else"));
}
