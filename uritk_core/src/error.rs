/*!
Error and result types reported by the parser, the component validators, and
the IPv4 normalizer.
*/

use error_chain::error_chain;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The syntactic region a validation error was reported for.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Scheme,
    Authority,
    Path,
    Query,
    Fragment,
}

error_chain! {
    errors {
        #[doc = "Provided string value is not a valid URI reference."]
        Syntax(s: String) {
            description("Provided string value is not a valid URI reference.")
            display("Provided string value `{}` is not a valid URI reference.", s)
        }
        #[doc = "An invalid character was found in a URI component."]
        InvalidChar(c: Component) {
            description("An invalid character was found in a URI component.")
            display("An invalid character was found in the {:?} URI component.", c)
        }
        #[doc = "An unescaped control byte was found in strict mode."]
        InvalidEncoding(c: Component) {
            description("An unescaped control byte was found in strict mode.")
            display("An unescaped control byte was found in the {:?} URI component.", c)
        }
        #[doc = "Provided string value is not a valid scheme."]
        ParseSchemeError(s: String) {
            description("Provided string value is not a valid scheme.")
            display("Provided string value `{}` is not a valid scheme.", s)
        }
        #[doc = "Provided string value is not a valid host."]
        ParseHostError(s: String) {
            description("Provided string value is not a valid host.")
            display("Provided string value `{}` is not a valid host.", s)
        }
        #[doc = "Provided string value is not a valid port."]
        ParsePortError(s: String) {
            description("Provided string value is not a valid port.")
            display("Provided string value `{}` is not a valid port.", s)
        }
        #[doc = "Provided string value is not a valid authority."]
        ParseAuthorityError(s: String) {
            description("Provided string value is not a valid authority.")
            display("Provided string value `{}` is not a valid authority.", s)
        }
        #[doc = "Provided string value is not a valid user information sub-component."]
        ParseUserInfoError(s: String) {
            description("Provided string value is not a valid user information sub-component.")
            display("Provided string value `{}` is not a valid user information sub-component.", s)
        }
        #[doc = "Provided string value is not a valid IP address literal."]
        ParseIpAddressError(s: String) {
            description("Provided string value is not a valid IP address literal.")
            display("Provided string value `{}` is not a valid IP address literal.", s)
        }
        #[doc = "Provided string value is not a well-formed media type."]
        ParseMediaTypeError(s: String) {
            description("Provided string value is not a well-formed media type.")
            display("Provided string value `{}` is not a well-formed media type.", s)
        }
        #[doc = "No arithmetic backend is available for IPv4 host normalization."]
        Ipv4CalculatorMissing {
            description("No arithmetic backend is available for IPv4 host normalization.")
            display("No arithmetic backend is available for IPv4 host normalization.")
        }
    }
}
