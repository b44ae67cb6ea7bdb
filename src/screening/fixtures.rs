//! Canned data served by the mock screening service

use once_cell::sync::Lazy;

use crate::domain::models::{NetworkMember, ScreeningResults, WorkHistoryEntry};

fn entry(company: &str, title: &str, period: &str) -> WorkHistoryEntry {
    WorkHistoryEntry {
        company: company.to_string(),
        title: title.to_string(),
        period: period.to_string(),
    }
}

static MEMBERS: Lazy<Vec<NetworkMember>> = Lazy::new(|| {
    vec![
        NetworkMember {
            nm_id: "6023085".to_string(),
            name: "Michael Bartikoski".to_string(),
            biography: "Michael Bartikoski is an executive in the food and beverage industry and is currently serving as COO for CraftMark Bakery, LLC - prior to that he was COO at Diamond Crystal Brands. He was also an interim executive for Rialto Banking Company serving as their VP of Operations.".to_string(),
            practice_area: "Consumer Goods & Services".to_string(),
            council_name: "Consumer Goods & Services Council".to_string(),
            country: "United States".to_string(),
            linkedin_url: "https://www.linkedin.com/in/michael-bartikoski-12345".to_string(),
            work_history: vec![
                entry("CraftMark Bakery, LLC", "Chief Operating Officer", "2020-Present"),
                entry("Diamond Crystal Brands", "Chief Operating Officer", "2018-2020"),
                entry("Rialto Banking Company", "VP of Operations", "2015-2018"),
            ],
        },
        NetworkMember {
            nm_id: "12345".to_string(),
            name: "Sarah Johnson".to_string(),
            biography: "Sarah Johnson is a senior technology executive with over 15 years of experience in software development and digital transformation. She currently serves as CTO at TechCorp Industries.".to_string(),
            practice_area: "Technology & Innovation".to_string(),
            council_name: "Technology Innovation Council".to_string(),
            country: "Canada".to_string(),
            linkedin_url: "https://www.linkedin.com/in/sarah-johnson-67890".to_string(),
            work_history: vec![
                entry("TechCorp Industries", "Chief Technology Officer", "2021-Present"),
                entry("Innovation Labs", "VP of Engineering", "2018-2021"),
            ],
        },
    ]
});

/// Exact-match member lookup
pub fn find_member(nm_id: &str) -> Option<&'static NetworkMember> {
    MEMBERS.iter().find(|member| member.nm_id == nm_id)
}

const SUMMARY_HTML: &str = r#"
    <div class="c-summary c-summary--clear">
      <div class="c-summary__body">
        <h3 class="c-summary__title">No Negative News or Legal Issues Found</h3>
        <p>
          After a comprehensive review of public records, news databases, and legal sources, there is no evidence of any lawsuits,
          controversies, scandals, or legal issues involving this Network Member. Searches covered all known professional tenures
          and industry positions including CraftMark Bakery LLC, Diamond Crystal Brands, and Rialto Banking Company.
        </p>
        <p>
          All sources confirm that the Network Member has maintained a professional reputation, with no public reports of criminal activity,
          malpractice, fraud, employee lawsuits, or any other negative incidents associated with their name. The screening process
          examined over 150 news sources, legal databases, and regulatory filings.
        </p>
        <div class="c-summary__box">
          <p class="c-summary__label">Detailed Findings:</p>
          <ul>
            <li>No criminal records found in federal or state databases</li>
            <li>No civil litigation as defendant in the past 10 years</li>
            <li>No regulatory violations or sanctions</li>
            <li>No negative media coverage or scandals</li>
            <li>No bankruptcy filings or financial misconduct</li>
          </ul>
        </div>
        <div class="c-summary__box">
          <p class="c-summary__label">Conclusion:</p>
          <p>
            Extensive searches across multiple reputable sources revealed no negative news, legal actions, or controversies.
            The Network Member appears to have a clean professional record with no compliance concerns identified.
          </p>
        </div>
      </div>
    </div>
"#;

const CITATIONS: [&str; 12] = [
    "https://www.beverage-secretions.com/tag/executive-news?utm_source=compliance_search",
    "https://www.beverage.co.uk/newsector/food-beverage-executives-2023?utm_source=compliance_search",
    "https://www.dailymail.co.uk/news/business/food-industry-leaders?utm_source=compliance_search",
    "https://case-law.vlex.com/vid/executive-litigation-search-685221107?utm_source=compliance_search",
    "https://finance.yahoo.com/news/diamond-crystal-brands-leadership-announcements?utm_source=compliance_search",
    "https://www.sec.gov/edgar/search/?q=diamond+crystal+brands&utm_source=compliance_search",
    "https://www.courtlistener.com/search/?q=michael+bartikoski&utm_source=compliance_search",
    "https://www.bloomberg.com/search?query=craftmark+bakery+executives&utm_source=compliance_search",
    "https://www.reuters.com/business/retail-consumer/food-beverage-industry-news/?utm_source=compliance_search",
    "https://www.wsj.com/search?query=food+industry+executives&utm_source=compliance_search",
    "https://www.ftc.gov/enforcement/cases-proceedings/search?combine=food+beverage&utm_source=compliance_search",
    "https://www.justice.gov/search/site/food%20industry%20executives?utm_source=compliance_search",
];

/// Results attached to every completed screening
pub fn screening_results() -> ScreeningResults {
    ScreeningResults {
        summary: SUMMARY_HTML.to_string(),
        citations: CITATIONS.iter().map(|url| url.to_string()).collect(),
    }
}

/// Placeholder replaced by the member's name in query templates
pub const NAME_PLACEHOLDER: &str = "Network Member";

pub const QUERY_TEMPLATES: [&str; 20] = [
    "\"Network Member\" lawsuit United States federal court",
    "\"Network Member\" fraud investigation SEC enforcement action",
    "\"Network Member\" arrest criminal charges indictment",
    "Any legal issues involving \"Network Member\" civil litigation",
    "\"Network Member\" fined by regulatory agencies FDA USDA",
    "\"Network Member\" has pending criminal charges prosecution",
    "\"Network Member\" fined for violations food safety regulations",
    "Were there any scandals involving \"Network Member\" corporate misconduct",
    "Was there fraud or corruption involving \"Network Member\" embezzlement",
    "Has \"Network Member\" faced any malpractice allegations negligence",
    "\"Network Member\" bankruptcy filing financial misconduct",
    "\"Network Member\" terminated fired for cause employment",
    "\"Network Member\" whistleblower complaint ethics violation",
    "\"Network Member\" insider trading securities violation",
    "\"Network Member\" discrimination lawsuit hostile workplace",
    "\"Network Member\" environmental violations EPA citations",
    "\"Network Member\" tax evasion IRS investigation",
    "\"Network Member\" antitrust violation price fixing conspiracy",
    "\"Network Member\" product liability recall safety issues",
    "\"Network Member\" bribery corruption foreign officials FCPA",
];
