//! Trimmed copies of the sites' markup, used by scraper and handler tests.

pub const ONLINEKHABAR_HOME: &str = r#"<!DOCTYPE html>
<html lang="ne">
<head><meta charset="utf-8"><title>Onlinekhabar</title></head>
<body>
  <section class="ok-bises">
    <div class="container">
      <h2>
        <a href="https://www.onlinekhabar.com/2025/10/100001/sansad-baithak">
          संसद बैठक आज बस्दै
        </a>
      </h2>
      <div class="ok-news-post-hour"><i class="ok-icon-clock"></i> <span>२ घण्टा अगाडि</span></div>
    </div>
  </section>
  <section class="ok-bises">
    <h2>विज्ञापन</h2>
  </section>
  <section class="ok-bises">
    <h2><a href="https://www.onlinekhabar.com/2025/10/100002/budget">बजेट कार्यान्वयनमा ढिलाइ</a></h2>
  </section>
  <section class="ok-section-latest">
    <h2><a href="https://www.onlinekhabar.com/2025/10/100003/other">अन्य समाचार</a></h2>
  </section>
</body>
</html>"#;

pub const RONBPOST_HOME: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body>
  <div class="uk-card uk-card-default">
    <h1 class="main-banner"><a href="https://www.ronbpost.com/news/heavy-rain"> काठमाडौंमा भारी वर्षा </a></h1>
    <h3 class="sub-title">उपत्यकाका सडक डुबानमा</h3>
    <p class="uk-margin-remove-bottom uk-text-lead">
      मौसम पूर्वानुमान महाशाखाका अनुसार वर्षा जारी रहनेछ।
    </p>
  </div>
  <div class="uk-card">
    <h1 class="main-banner"><a href="https://www.ronbpost.com/news/gold">सुनको मूल्य घट्यो</a></h1>
  </div>
  <div class="uk-card"><img src="/ads/banner.png" alt=""></div>
</body>
</html>"#;

pub const HAMROPATRO_NEWS: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body>
  <div class="item newsCard">
    <h2 class="newsheadingMobile"><a href="/news/12345">पेट्रोलियम पदार्थको मूल्य बढ्यो</a></h2>
    <div class="desc">नेपाल आयल निगमले नयाँ मूल्य सार्वजनिक गर्यो।</div>
    <div class="source">कान्तिपुर <span>३ घण्टा अगाडि</span></div>
  </div>
  <div class="item newsCard">
    <h2 class="newsheadingMobile"><a href="https://example.com/story">बाह्य समाचार</a></h2>
  </div>
</body>
</html>"#;

pub const ONLINEKHABAR_ARTICLE: &str = r#"<!DOCTYPE html>
<html lang="ne">
<head><meta charset="utf-8"><title>संसद बैठक आज बस्दै</title></head>
<body>
  <article>
    <h1 class="entry-title">संसद बैठक आज बस्दै</h1>
    <div class="ok-news-author"><span class="author-name">अनलाइनखबर संवाददाता</span></div>
    <div class="ok-news-post-hour"><span>कात्तिक ३०, २०८२</span></div>
    <div class="ai_summary_block">
      <ul class="ai_summary_block_list">
        <li>संसद बैठक आज दिउँसो बस्दैछ।</li>
        <li> बैठकमा विधेयक पेश हुनेछ। </li>
      </ul>
    </div>
    <div class="ok18-single-post-content-wrap">
      <p>प्रतिनिधिसभाको बैठक आज दिउँसो १ बजे सिंहदरबारस्थित संसद भवनमा बस्दैछ र यसमा महत्त्वपूर्ण विधेयकहरू पेश हुनेछन्।</p>
      <p>फोटो : अनलाइनखबर</p>
      <p>सभामुखको कार्यालयका अनुसार बैठकमा सरकारले ल्याएका तीनवटा विधेयकमाथि छलफल हुने कार्यसूची तय गरिएको छ।</p>
    </div>
  </article>
  <aside>
    <p>सम्बन्धित समाचार: यो अनुच्छेद लेखको मुख्य भाग बाहिर छ त्यसैले यसलाई विवरणमा समावेश गरिनु हुँदैन।</p>
  </aside>
</body>
</html>"#;
