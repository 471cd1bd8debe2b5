//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> jetons -> RPN -> pile f64
//!
//! Chaque appel est indépendant : aucune donnée partagée entre appels,
//! hormis la table (lecture seule) des opérateurs dans rpn.rs.

use log::{debug, trace};

use super::erreur::EvaluationError;
use super::jetons::{format_tokens, tokenize, BinaryOp, Token};
use super::normalise::normaliser;
use super::rpn::to_rpn;

/// Trace du calcul, affichée dans le panneau “Démarche”.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue `expression` en lisant `separateur` comme point décimal.
///
/// `separateur` vaut `"."` pour la convention canonique ; `","` pour un poste
/// francophone, etc.
pub fn evaluate(expression: &str, separateur: &str) -> Result<f64, EvaluationError> {
    evaluate_detaille(expression, separateur).map(|(v, _d)| v)
}

/// Comme [`evaluate`], avec en plus la démarche (jetons + RPN).
pub fn evaluate_detaille(
    expression: &str,
    separateur: &str,
) -> Result<(f64, DemarcheNoyau), EvaluationError> {
    if expression.trim().is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }

    // 1) Séparateur local -> '.'
    let texte = normaliser(expression, separateur);

    // 2) Jetons
    let jetons = tokenize(&texte)?;
    trace!("{} jetons pour {:?}", jetons.len(), texte);

    // 3) RPN
    let rpn = to_rpn(&jetons)?;

    let demarche = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    debug!("rpn: {}", demarche.rpn);

    // 4) Pile
    let valeur = eval_rpn(&rpn)?;
    debug!("{:?} = {}", expression, valeur);

    Ok((valeur, demarche))
}

/// Exécute une suite RPN sur une pile de f64.
///
/// La pile doit contenir exactement une valeur à la fin.
pub fn eval_rpn(rpn: &[Token]) -> Result<f64, EvaluationError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Token::Number(txt) => st.push(lire_nombre(txt)?),

            Token::UnaryMinus => {
                let a = st
                    .pop()
                    .ok_or_else(|| EvaluationError::MissingOperand(tok.to_string()))?;
                st.push(-a);
            }

            Token::Operator(op) => {
                // b d’abord : a a été empilé avant
                let (Some(b), Some(a)) = (st.pop(), st.pop()) else {
                    return Err(EvaluationError::MissingOperand(tok.to_string()));
                };
                st.push(appliquer(*op, a, b)?);
            }

            // to_rpn ne laisse jamais de parenthèse
            Token::LeftParen | Token::RightParen => {
                return Err(EvaluationError::MismatchedParentheses)
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvaluationError::MalformedExpression),
    }
}

fn appliquer(op: BinaryOp, a: f64, b: f64) -> Result<f64, EvaluationError> {
    Ok(match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(EvaluationError::DivisionByZero);
            }
            a / b
        }
        // NaN / ∞ passent tels quels
        BinaryOp::Pow => a.powf(b),
    })
}

/// Texte d’un jeton Number -> f64 (séparateur '.').
/// Seul cas d’échec possible : un point isolé.
fn lire_nombre(txt: &str) -> Result<f64, EvaluationError> {
    txt.parse::<f64>()
        .map_err(|_| EvaluationError::InvalidNumber(txt.to_string()))
}
