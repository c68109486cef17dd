/*!
Error and result types reported by the template parser and the expander.
*/

use error_chain::error_chain;

error_chain! {
    links {
        Uri(uritk_core::error::Error, uritk_core::error::ErrorKind)
        #[doc = "An error from parsing an expanded result as a URI."];
    }
    errors {
        #[doc = "Provided string value is not a valid URI template."]
        Syntax(s: String) {
            description("Provided string value is not a valid URI template.")
            display("Provided string value `{}` is not a valid URI template.", s)
        }
        #[doc = "A template expression is malformed."]
        ExpressionSyntax(s: String) {
            description("A template expression is malformed.")
            display("The template expression `{{{}}}` is malformed.", s)
        }
        #[doc = "A variable specifier carries both a prefix and an explode modifier."]
        PrefixAndExplode(s: String) {
            description("A variable specifier carries both a prefix and an explode modifier.")
            display("The variable specifier `{}` carries both a prefix and an explode modifier.", s)
        }
        #[doc = "A composite value contains another composite value."]
        NestedSequence(s: String) {
            description("A composite value contains another composite value.")
            display("The value assigned to `{}` nests one composite value inside another.", s)
        }
        #[doc = "A prefix modifier was applied to a composite value."]
        UnexpandableValue(s: String) {
            description("A prefix modifier was applied to a composite value.")
            display("The variable `{}` holds a composite value, which a prefix modifier cannot apply to.", s)
        }
    }
}
