use super::*;

impl Parser {
    /// Parses a statement. Dispatch order: commands, query built-ins used as
    /// statements, assignments, labels, `GoTo`.
    pub fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        let lexeme = self.current().lexeme.clone();
        if let Some(command) = Command::from_keyword(&lexeme) {
            return self.parse_command_stmt(command);
        }
        if Builtin::from_keyword(&lexeme).is_some() {
            return self.parse_expr_stmt();
        }

        match (&self.current().kind, &self.lookahead(1).kind) {
            (TokenKind::Identifier(_), TokenKind::Arrow) => self.parse_assignment(),
            (TokenKind::Identifier(_), TokenKind::NewLine)
            | (TokenKind::Identifier(_), TokenKind::EndOfInput) => self.parse_label_declaration(),
            (TokenKind::GoTo, _) => self.parse_goto_stmt(),
            _ => {
                let token = self.current();
                Err(SyntaxError::UnknownStatement {
                    found: token.describe(),
                    line: token.line,
                }
                .into())
            }
        }
    }

    fn parse_command_stmt(&mut self, command: Command) -> ParseResult<Stmt> {
        let line = self.next().line; // eat keyword
        let args = self.parse_args(command.keyword(), line)?;
        self.check_args(command.keyword(), command.params(), &args, line)?;
        Ok(Stmt::new(StmtKind::CommandCall { command, args }, line))
    }

    fn parse_expr_stmt(&mut self) -> ParseResult<Stmt> {
        let line = self.current().line;
        let expr = self.parse_expr()?;
        if typeck::classify(&expr, Context::Permissive).is_none() {
            return Err(StaticTypeError::UntypedExpression { line }.into());
        }
        Ok(Stmt::new(StmtKind::ExprStmt(expr), line))
    }

    fn parse_assignment(&mut self) -> ParseResult<Stmt> {
        let token = self.next();
        let ident = match token.kind {
            TokenKind::Identifier(ident) => ident,
            _ => return Err(self.unexpected("an identifier")),
        };
        self.expect(TokenKind::Arrow, "`<-`")?;

        let initializer = self.parse_expr()?;
        let ty = typeck::classify(&initializer, Context::Permissive).ok_or(
            StaticTypeError::UntypedExpression { line: token.line },
        )?;
        Ok(Stmt::new(
            StmtKind::VarDeclaration {
                ident,
                initializer,
                ty,
            },
            token.line,
        ))
    }

    fn parse_label_declaration(&mut self) -> ParseResult<Stmt> {
        let token = self.next();
        match token.kind {
            TokenKind::Identifier(label) => Ok(Stmt::new(StmtKind::Label(label), token.line)),
            _ => Err(self.unexpected("a label")),
        }
    }

    fn parse_goto_stmt(&mut self) -> ParseResult<Stmt> {
        let line = self.expect(TokenKind::GoTo, "`GoTo`")?.line;
        self.expect(TokenKind::OpenBracket, "`[`")?;
        let label = match self.current().kind.clone() {
            TokenKind::Identifier(label) => {
                self.next();
                label
            }
            _ => return Err(self.unexpected("a label name")),
        };
        self.expect(TokenKind::CloseBracket, "`]`")?;

        self.expect(TokenKind::OpenParen, "`(`")?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::CloseParen, "`)`")?;

        if !typeck::is_boolean(&condition, Context::Restrictive) {
            return Err(StaticTypeError::NonBooleanCondition { label, line }.into());
        }
        Ok(Stmt::new(StmtKind::GoTo { label, condition }, line))
    }

    /* Arguments */
    /// Parses a parenthesized, comma separated argument list for `name`.
    pub(super) fn parse_args(&mut self, name: &str, line: usize) -> ParseResult<Vec<Expr>> {
        self.expect(TokenKind::OpenParen, "`(`")?;

        let mut args = Vec::new();
        if self.eat(TokenKind::CloseParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);

            if self.eat(TokenKind::Comma) {
                if self.check(&TokenKind::CloseParen)
                    || self.check(&TokenKind::NewLine)
                    || self.at_end()
                {
                    return Err(SyntaxError::TrailingComma {
                        name: name.to_string(),
                        line,
                    }
                    .into());
                }
            } else if self.eat(TokenKind::CloseParen) {
                break;
            } else {
                return Err(SyntaxError::MissingCloseParen {
                    name: name.to_string(),
                    found: self.current().describe(),
                    line,
                }
                .into());
            }
        }

        Ok(args)
    }

    /// Checks the argument count first, then each argument against its [`Param`] class.
    pub(super) fn check_args(
        &self,
        name: &str,
        params: &[Param],
        args: &[Expr],
        line: usize,
    ) -> ParseResult<()> {
        if args.len() != params.len() {
            return Err(SyntaxError::ArgumentCount {
                name: name.to_string(),
                expected: params.len(),
                found: args.len(),
                line,
            }
            .into());
        }

        for (i, (param, arg)) in params.iter().zip(args).enumerate() {
            let invalid = || StaticTypeError::InvalidArgument {
                name: name.to_string(),
                position: i + 1,
                expected: param.describe(),
                line,
            };
            match param {
                Param::Color => match arg {
                    Expr::Literal(Literal::Str(color)) if !grammar::is_color(color) => {
                        return Err(StaticTypeError::InvalidColor {
                            name: name.to_string(),
                            color: color.clone(),
                            line,
                        }
                        .into())
                    }
                    Expr::Literal(Literal::Str(_)) => {}
                    _ => return Err(invalid().into()),
                },
                Param::Numeric => {
                    if !typeck::is_numeric(arg, Context::Restrictive) {
                        return Err(invalid().into());
                    }
                }
            }
        }
        Ok(())
    }
}
