//! Canned content tables for each assistant mode.
//!
//! Every mode owns one welcome message, four welcome suggestions and a pool
//! of four replies. The tables are process-wide read-only data; nothing
//! mutates them after startup.

use crafthub_types::assistant::AssistantMode;

/// Follow-up prompts that may be attached to any reply, whatever the mode.
pub const FOLLOW_UP_SUGGESTIONS: [&str; 4] = [
    "Tell me more about this",
    "Show me examples",
    "What's the next step?",
    "Any other recommendations?",
];

/// Static content for one mode.
#[derive(Debug)]
pub struct ModeContent {
    pub welcome: &'static str,
    pub welcome_suggestions: [&'static str; 4],
    pub replies: [&'static str; 4],
}

static ADVISOR: ModeContent = ModeContent {
    welcome: "Hello! I'm your AI Business Advisor. I can help you with pricing strategies, market opportunities, legal guidance, and business planning. What would you like to discuss today?",
    welcome_suggestions: [
        "Help me price my pottery pieces",
        "What legal documents do I need?",
        "How to find export opportunities?",
        "Business planning advice",
    ],
    replies: [
        "Based on current market analysis, I recommend pricing your handwoven scarves at ₹1,200-1,800. This is 15% above current market rate due to your excellent craftsmanship quality.",
        "For export documentation, you'll need: GST registration, IEC code, and craft authenticity certificate. I can help you generate these documents automatically.",
        "I've identified 3 new market opportunities in your area: Wedding season demand is increasing by 23%, and there's a new craft fair in Delhi next month.",
        "Your business shows strong growth potential. Consider expanding to online platforms - I predict 40% revenue increase based on similar artisan profiles.",
    ],
};

static QUALITY: ModeContent = ModeContent {
    welcome: "Welcome to Quality Assessment! I can analyze your craft photos, provide quality scores, suggest improvements, and help with certification requirements. How can I assist you?",
    welcome_suggestions: [
        "Analyze my craft quality",
        "Improvement suggestions",
        "Certification requirements",
        "Quality standards check",
    ],
    replies: [
        "Quality Analysis Complete: Your pottery shows 94% adherence to traditional standards. Minor improvements suggested in glaze consistency and finishing touches.",
        "Excellent work! Your weaving technique scores 96/100. The thread tension is perfect, and color combinations are commercially viable.",
        "Quality Assessment: Your jewelry craftsmanship meets export standards. I recommend obtaining BIS certification to access premium markets.",
        "Great improvement! Compared to last month, your quality score increased from 87% to 93%. Keep focusing on consistent finishing.",
    ],
};

static MARKET: ModeContent = ModeContent {
    welcome: "Hi! I'm your Market Intelligence assistant. I can provide real-time pricing data, demand trends, competitor analysis, and export opportunities. What market insights do you need?",
    welcome_suggestions: [
        "Current market prices",
        "Demand trends analysis",
        "Competitor pricing",
        "Export market opportunities",
    ],
    replies: [
        "Current Market Update: Handloom textiles are trending 18% higher this month. Demand peak expected during festival season in 3 weeks.",
        "Price Analysis: Your craft category shows ₹200-400 price increase opportunity. Competitors are pricing 12% lower but with inferior quality.",
        "Export Opportunity Alert: European markets showing 25% increased demand for authentic Indian crafts. Suggested target: Germany and France.",
        "Market Intelligence: Similar artisans in your region report 30% revenue growth after implementing AI recommendations. Ready to optimize your strategy?",
    ],
};

static GENERIC: ModeContent = ModeContent {
    welcome: "Hello! I'm your AI assistant. I'm here to help you with your craft business. How can I support you today?",
    welcome_suggestions: [
        "Business advice",
        "Market insights",
        "Quality assessment",
        "General help",
    ],
    replies: [
        "I can help you with business strategy, quality assessment, market insights, and more. What specific area would you like to focus on?",
        "Based on your profile, I recommend focusing on digital marketing and quality certification. This combination typically increases revenue by 35%.",
        "Your craft business has great potential! Let me analyze your current performance and suggest personalized improvement strategies.",
        "I'm here to support your success. Whether it's pricing, quality, or market expansion - I have data-driven insights ready for you.",
    ],
};

/// Content table for a mode.
pub fn content(mode: AssistantMode) -> &'static ModeContent {
    match mode {
        AssistantMode::Advisor => &ADVISOR,
        AssistantMode::Quality => &QUALITY,
        AssistantMode::Market => &MARKET,
        AssistantMode::Generic => &GENERIC,
    }
}

pub fn welcome_text(mode: AssistantMode) -> &'static str {
    content(mode).welcome
}

pub fn welcome_suggestions(mode: AssistantMode) -> &'static [&'static str] {
    &content(mode).welcome_suggestions
}

pub fn reply_pool(mode: AssistantMode) -> &'static [&'static str] {
    &content(mode).replies
}
