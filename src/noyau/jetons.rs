// src/noyau/jetons.rs

use std::fmt;

use super::erreur::EvaluationError;

/// Opérateur binaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow, // ^
}

impl BinaryOp {
    pub fn symbole(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Suite de chiffres avec au plus un '.', gardée en texte jusqu’à l’évaluation.
    Number(String),
    Operator(BinaryOp),
    /// Moins unaire : jeton distinct, jamais égal à `Operator(Sub)`.
    UnaryMinus,
    LeftParen,
    RightParen,
}

impl Token {
    /// Vrai pour un opérateur binaire ou le moins unaire.
    pub fn est_operateur(&self) -> bool {
        matches!(self, Token::Operator(_) | Token::UnaryMinus)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(txt) => f.write_str(txt),
            Token::Operator(op) => write!(f, "{}", op.symbole()),
            Token::UnaryMinus => f.write_str("u-"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// Tokenize une chaîne (déjà normalisée) en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 7.)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - moins unaire (début, après un opérateur ou après '(')
///
/// Un second '.' dans un même nombre termine ce nombre : "1.2.3" -> "1.2" ".3".
pub fn tokenize(s: &str) -> Result<Vec<Token>, EvaluationError> {
    let mut out: Vec<Token> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : chiffres + au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point_vu = c == '.';
            i += 1;
            while i < chars.len()
                && (chars[i].is_ascii_digit() || (chars[i] == '.' && !point_vu))
            {
                if chars[i] == '.' {
                    point_vu = true;
                }
                i += 1;
            }
            out.push(Token::Number(chars[start..i].iter().collect()));
            continue;
        }

        let tok = match c {
            '+' => Token::Operator(BinaryOp::Add),
            '*' => Token::Operator(BinaryOp::Mul),
            '/' => Token::Operator(BinaryOp::Div),
            '^' => Token::Operator(BinaryOp::Pow),
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '-' => {
                // unaire si rien avant, ou après un opérateur / '('
                let unaire = match out.last() {
                    None => true,
                    Some(prev) => prev.est_operateur() || *prev == Token::LeftParen,
                };
                if unaire {
                    Token::UnaryMinus
                } else {
                    Token::Operator(BinaryOp::Sub)
                }
            }
            _ => {
                return Err(EvaluationError::UnexpectedCharacter {
                    position: i,
                    caractere: c,
                })
            }
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
