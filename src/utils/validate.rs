use once_cell::sync::Lazy;
use regex::Regex;

static NUSNET_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[eE]\d{7}$").expect("Invalid NUSNET ID regex"));

static NUSNET_EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // 仅接受 @u.nus.edu 与 @nus.edu.sg 两个域名
    Regex::new(r"^[A-Za-z0-9._%+-]+@(u\.nus\.edu|nus\.edu\.sg)$")
        .expect("Invalid NUSNET email regex")
});

pub fn validate_nusnet_id(id: &str) -> Result<(), &'static str> {
    // NUSNET ID 格式校验：字母 e 开头加 7 位数字
    if !NUSNET_ID_RE.is_match(id) {
        return Err("NUSNET ID must be the letter 'e' followed by 7 digits");
    }
    Ok(())
}

pub fn validate_nusnet_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须是 NUS 域名
    if !NUSNET_EMAIL_RE.is_match(email) {
        return Err("Email must be an NUS address");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_nusnet_id() {
        assert!(validate_nusnet_id("e0123456").is_ok());
        assert!(validate_nusnet_id("E7654321").is_ok());
        assert!(validate_nusnet_id("e012345").is_err());
        assert!(validate_nusnet_id("a0123456").is_err());
        assert!(validate_nusnet_id("e0123456x").is_err());
        assert!(validate_nusnet_id("").is_err());
    }

    #[test]
    fn test_validate_nusnet_email() {
        assert!(validate_nusnet_email("student@u.nus.edu").is_ok());
        assert!(validate_nusnet_email("prof@nus.edu.sg").is_ok());
        assert!(validate_nusnet_email("someone@gmail.com").is_err());
        assert!(validate_nusnet_email("not-an-email").is_err());
        // 域名交叉组合不放行
        assert!(validate_nusnet_email("x@nus.edu").is_err());
        assert!(validate_nusnet_email("x@u.nus.edu.sg").is_err());
    }
}
