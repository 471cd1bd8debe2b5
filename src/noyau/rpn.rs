// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Token (infixe) en RPN (postfix)
// - Vérifier l’appariement des parenthèses
//
// Règles:
// - Nombre : sortie directe
// - Opérateur : dépile tant que le sommet est plus prioritaire,
//   ou de même priorité si l’opérateur courant est associatif à gauche
// - '^' et moins unaire sont associatifs à droite : "2^3^2" = 2^(3^2), "--2" = -(-2)
//
// NOTE:
// - Moins unaire (5) lie plus fort que '^' (4) : "-2^2" = (-2)^2 = 4.
//   Convention d’origine, conservée telle quelle.

use super::erreur::EvaluationError;
use super::jetons::{BinaryOp, Token};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Priorité + associativité d’un opérateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorInfo {
    pub precedence: u8,
    pub associativity: Associativity,
}

const ADDITIF: OperatorInfo = OperatorInfo {
    precedence: 2,
    associativity: Associativity::Left,
};
const MULTIPLICATIF: OperatorInfo = OperatorInfo {
    precedence: 3,
    associativity: Associativity::Left,
};
const PUISSANCE: OperatorInfo = OperatorInfo {
    precedence: 4,
    associativity: Associativity::Right,
};
const MOINS_UNAIRE: OperatorInfo = OperatorInfo {
    precedence: 5,
    associativity: Associativity::Right,
};

pub const fn binary_info(op: BinaryOp) -> OperatorInfo {
    match op {
        BinaryOp::Add | BinaryOp::Sub => ADDITIF,
        BinaryOp::Mul | BinaryOp::Div => MULTIPLICATIF,
        BinaryOp::Pow => PUISSANCE,
    }
}

/// Table statique des opérateurs. `None` pour nombres et parenthèses.
pub const fn operator_info(t: &Token) -> Option<OperatorInfo> {
    match t {
        Token::Operator(op) => Some(binary_info(*op)),
        Token::UnaryMinus => Some(MOINS_UNAIRE),
        Token::Number(_) | Token::LeftParen | Token::RightParen => None,
    }
}

/// Sort vers `out` les opérateurs du sommet qui doivent passer avant `courant`.
/// S’arrête sur '(' ou pile vide.
fn depiler_prioritaires(out: &mut Vec<Token>, ops: &mut Vec<Token>, courant: OperatorInfo) {
    while let Some(sommet) = ops.last().and_then(operator_info) {
        let doit_pop = sommet.precedence > courant.precedence
            || (sommet.precedence == courant.precedence
                && courant.associativity == Associativity::Left);
        if !doit_pop {
            break;
        }
        if let Some(top) = ops.pop() {
            out.push(top);
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [3, +, 4, *, 2]
///   rpn:    [3, 4, 2, *, +]
pub fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>, EvaluationError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Token::Number(_) => out.push(tok),

            Token::Operator(op) => {
                depiler_prioritaires(&mut out, &mut ops, binary_info(op));
                ops.push(tok);
            }

            Token::UnaryMinus => {
                depiler_prioritaires(&mut out, &mut ops, MOINS_UNAIRE);
                ops.push(tok);
            }

            Token::LeftParen => ops.push(tok),

            Token::RightParen => {
                // dépile jusqu’à '(' ; pile épuisée => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Token::LeftParen) => break,
                        Some(top) => out.push(top),
                        None => return Err(EvaluationError::MismatchedParentheses),
                    }
                }
            }
        }
    }

    // vide la pile ops ; une '(' restante n’a jamais été fermée
    while let Some(op) = ops.pop() {
        if matches!(op, Token::LeftParen | Token::RightParen) {
            return Err(EvaluationError::MismatchedParentheses);
        }
        out.push(op);
    }

    Ok(out)
}
