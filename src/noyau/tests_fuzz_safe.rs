//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - toute erreur doit appartenir à la taxonomie documentée
//! - invariant clé : même entrée => même sortie (aucun état caché)

use std::time::{Duration, Instant};

use super::{evaluate, EvaluationError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

/// Erreurs normales pour une expression bien formée mais aléatoire.
fn is_erreur_attendue(e: &EvaluationError) -> bool {
    matches!(e, EvaluationError::DivisionByZero)
}

/// Empreinte comparable (NaN inclus).
fn empreinte(expr: &str) -> Result<u64, EvaluationError> {
    evaluate(expr, ".").map(f64::to_bits)
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits entiers, 0 inclus (utile pour la division par zéro)
    let a = rng.pick(10);
    if rng.coin() {
        format!("{a}")
    } else {
        format!("{a}.{}", rng.pick(100))
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!(
            "({}+{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        2 => format!(
            "({}-{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        3 => format!(
            "{} * {}",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        4 => format!(
            "{}/{}",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        5 => format!("-{}", gen_expr(rng, depth - 1)),
        // exposant borné : évite les ∞ en chaîne
        6 => format!("({})^{}", gen_expr(rng, depth - 1), rng.pick(4)),
        _ => format!("({})", gen_expr(rng, depth - 1)),
    }
}

/// Bruit : caractères du domaine + quelques intrus.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '7', '.', '+', '-', '*', '/', '^', '(', ')', ' ', ',', '#', 'x',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        match evaluate(&expr, ".") {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        budget(t0, max);

        let ea = gen_expr(&mut a, 4);
        let eb = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);
        assert_eq!(empreinte(&ea), empreinte(&eb), "expr={ea:?}");
        // rejouer la même entrée
        assert_eq!(empreinte(&ea), empreinte(&ea), "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);

    let mut categories = [0usize; 8];

    for _ in 0..500 {
        budget(t0, max);

        let len = rng.pick(24) as usize;
        let s = gen_bruit(&mut rng, len);

        // Chaque issue doit tomber dans une case connue.
        let k = match evaluate(&s, ".") {
            Ok(_) => 0,
            Err(EvaluationError::EmptyExpression) => 1,
            Err(EvaluationError::UnexpectedCharacter { position, caractere }) => {
                assert_eq!(s.chars().nth(position), Some(caractere), "s={s:?}");
                2
            }
            Err(EvaluationError::MismatchedParentheses) => 3,
            Err(EvaluationError::MissingOperand(_)) => 4,
            Err(EvaluationError::DivisionByZero) => 5,
            Err(EvaluationError::MalformedExpression) => 6,
            Err(EvaluationError::InvalidNumber(txt)) => {
                assert_eq!(txt, ".", "s={s:?}");
                7
            }
        };
        categories[k] += 1;
    }

    // le bruit doit au moins toucher les intrus et les parenthèses
    assert!(categories[2] > 0, "aucun caractère inattendu vu");
    assert!(categories[3] > 0, "aucune parenthèse orpheline vue");
}

#[test]
fn fuzz_safe_virgule_locale() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..100 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let local = expr.replace('.', ",");
        assert_eq!(
            evaluate(&local, ",").map(f64::to_bits),
            empreinte(&expr),
            "expr={expr:?}"
        );
    }
}
