use super::*;

/// Binding power of the operand of a prefix operator. Higher than every binop
/// so that `-2 ** 2` parses as `(-2) ** 2`.
const PREFIX_BP: u8 = 15;

impl Parser {
    /* Expressions */
    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_expr_bp`] with `min_bp = 0`.
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_expr_bp(0) // 0 to accept any expression
    }

    /// Parses a primary (atom) expression.
    fn parse_primary_expr(&mut self) -> ParseResult<Expr> {
        // NOTE: prefix operators are handled here
        match self.current().kind {
            TokenKind::NumberLit(_) | TokenKind::BoolLit(_) | TokenKind::StringLit(_) => {
                self.parse_literal_expr()
            }
            TokenKind::Identifier(_) => self.parse_identifier_expr(),
            TokenKind::OpenParen => {
                self.next();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::CloseParen, "`)`")?;
                Ok(Expr::Grouping(Box::new(inner)))
            }
            TokenKind::LogicalNot => {
                self.next();
                Ok(Expr::Unary {
                    op: UnaryOp::Not,
                    arg: Box::new(self.parse_expr_bp(PREFIX_BP)?),
                })
            }
            TokenKind::Minus => {
                self.next();
                Ok(Expr::Unary {
                    op: UnaryOp::Neg,
                    arg: Box::new(self.parse_expr_bp(PREFIX_BP)?),
                })
            }
            _ => match Builtin::from_keyword(&self.current().lexeme) {
                Some(builtin) => self.parse_call_expr(builtin),
                None => Err(self.unexpected("an expression")),
            },
        }
    }

    /// Parses an expression with the specified `min_bp`.
    /// To parse any expression use, [`Self::parse_expr`].
    fn parse_expr_bp(&mut self, min_bp: u8) -> ParseResult<Expr> {
        let mut lhs = self.parse_primary_expr()?;

        loop {
            let op = match BinaryOp::from_token(&self.current().kind) {
                Some(op) => op,
                None => break, // not a valid binop, stop parsing
            };
            let (l_bp, r_bp) = op.binding_power();
            if l_bp < min_bp {
                break; // less than the min_bp, stop parsing
            }

            // self.current() is a valid binop
            self.next();

            let rhs = self.parse_expr_bp(r_bp)?;

            lhs = Expr::Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            }
        }

        Ok(lhs)
    }

    /* Expressions.Literals */
    /// Parses a literal expression.
    /// A literal can be a number, bool or string literal.
    fn parse_literal_expr(&mut self) -> ParseResult<Expr> {
        let val = match &self.current().kind {
            TokenKind::NumberLit(val) => Literal::Number(*val),
            TokenKind::BoolLit(val) => Literal::Bool(*val),
            TokenKind::StringLit(val) => Literal::Str(val.clone()),
            _ => return Err(self.unexpected("a literal")),
        };
        self.next(); // eat parsed token
        Ok(Expr::Literal(val))
    }

    /* Expressions.Identifier */
    /// Parses a variable read.
    fn parse_identifier_expr(&mut self) -> ParseResult<Expr> {
        match self.next().kind {
            TokenKind::Identifier(ident) => Ok(Expr::Variable(ident)),
            _ => Err(self.unexpected("an identifier")),
        }
    }

    /* Expressions.Call */
    /// Parses a query built-in call. Arity and argument classes are checked here.
    fn parse_call_expr(&mut self, builtin: Builtin) -> ParseResult<Expr> {
        let line = self.next().line; // eat keyword
        let args = self.parse_args(builtin.keyword(), line)?;
        self.check_args(builtin.keyword(), builtin.params(), &args, line)?;
        Ok(Expr::Call { builtin, args })
    }
}
